//! Nivesh Core - Domain entities, services, and traits.
//!
//! This crate contains the investment domain and the portfolio aggregation
//! engine. It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod investments;
pub mod portfolio;

// Re-export common types from the investment and portfolio modules
pub use investments::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
