//! Shared types, models and reporting core for the K2N inventory and sales ledger
//!
//! This crate contains the code shared between the backend, the frontend (via WASM),
//! and the tests. Nothing in here performs I/O.

pub mod models;
pub mod reporting;
pub mod types;
pub mod validation;

pub use models::*;
pub use reporting::*;
pub use types::*;
pub use validation::*;
