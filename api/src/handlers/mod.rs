//! HTTP handlers

pub mod archive;
pub mod auth;
pub mod catalog;
pub mod members;
pub mod promotions;
pub mod salary;
