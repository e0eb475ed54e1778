//! Shared vocabulary for GateLink: validated value types, the device
//! command alphabet, and the configuration model everything else
//! consumes.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
