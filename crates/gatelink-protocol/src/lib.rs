//! Command grammar for GSM relay devices.
//!
//! This crate turns user intents into the SMS command strings the relay
//! firmware understands. [`Command`] and [`Command::encode`] define the
//! grammar; [`CommandBuilder`] is the ergonomic front door;
//! [`CommandRequest`] carries raw form input through advisory validation
//! and live previews until it resolves into a typed command.

pub mod builder;
pub mod command;
pub mod commands;
pub mod request;
pub mod validation;

pub use builder::CommandBuilder;
pub use command::Command;
pub use commands::CommandKind;
pub use request::{CommandRequest, ConfigSnapshot};
pub use validation::{
    ValidationError, validate_password, validate_phone, validate_serial, validate_serial_range,
    validate_unit_number, validate_window,
};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
