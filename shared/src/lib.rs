//! Shared types and models for the AgroYield platform
//!
//! This crate contains types shared between the application core, the
//! geodata proxy service, and other components of the system.

pub mod models;
pub mod types;
pub mod units;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
