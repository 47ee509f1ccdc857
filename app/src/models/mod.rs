//! Domain models for the AgroYield application
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
