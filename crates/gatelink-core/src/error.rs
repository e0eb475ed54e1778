use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Field format errors
    #[error("Invalid serial '{value}': must be a number between 1 and 200")]
    InvalidSerial { value: String },

    #[error("Invalid serial range: start {start} is after end {end}")]
    InvalidSerialRange { start: u16, end: u16 },

    #[error("Invalid phone number: {reason}")]
    InvalidPhone { reason: String },

    #[error("Malformed timestamp '{value}': {reason}")]
    MalformedTimestamp { value: String, reason: String },

    #[error("Incomplete time window: start and end must both be set")]
    IncompleteTimeWindow,

    #[error("Invalid password: {reason}")]
    InvalidPassword { reason: String },

    #[error("Invalid latch time '{value}': must be 3 digits (000-999)")]
    InvalidLatchTime { value: String },

    #[error("Invalid access mode '{value}': expected AUT or ALL")]
    InvalidAccessMode { value: String },

    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    // Configuration snapshot errors
    #[error("No device password configured")]
    MissingPassword,

    #[error("No unit number configured")]
    MissingUnitNumber,
}

pub type Result<T> = std::result::Result<T, Error>;
