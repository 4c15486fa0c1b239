//! Domain layer
//!
//! Pure domain models and the rank catalog. No I/O here; persistence and
//! delivery concerns live behind the traits in `ports`.

pub mod catalog;
pub mod entities;
pub mod ports;

pub use catalog::{Badge, RankCatalog};
