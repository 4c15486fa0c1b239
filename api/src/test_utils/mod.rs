//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Manual mocks are more explicit and easier to debug than macro-generated
//! ones, and we control exactly what they return.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
