//! Application services for the AgroYield core

pub mod autofill;
pub mod farms;
pub mod form;
pub mod notification;
pub mod prediction;

pub use autofill::AutoFillCoordinator;
pub use farms::FarmService;
pub use form::FormSession;
pub use notification::{Advisory, AdvisoryChannel, AdvisoryLevel};
pub use prediction::PredictionService;
