//! Advisory validation for half-filled command forms.
//!
//! These checks are deliberately decoupled from command construction so
//! a caller can flag problems while the user is still typing, next to a
//! live preview of the command text. Passing here is advisory only; the
//! typed constructors in `gatelink-core` remain the gate that makes a
//! command well formed.

use thiserror::Error;

use gatelink_core::{Password, PhoneNumber, Serial};

/// What is wrong with a form, as a stable tag a UI can map to a field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The configuration has no device phone number to send to.
    #[error("no unit number configured")]
    MissingUnitNumber,

    /// The configuration has no device password.
    #[error("no device password configured")]
    MissingPassword,

    /// The password is present but not exactly 4 digits.
    #[error("device password must be exactly 4 digits")]
    InvalidPassword,

    /// The slot serial is not a number between 1 and 200.
    #[error("serial must be a number between 1 and 200")]
    InvalidSerial,

    /// The phone number is empty or carries no usable digits.
    #[error("phone number is required")]
    InvalidPhone,

    /// Only one bound of the access window was provided.
    #[error("start and end of the access window must both be set")]
    IncompleteTimeWindow,

    /// The slot range runs backwards.
    #[error("range start must not be after its end")]
    InvalidSerialRange,
}

/// Checks that a device number is configured.
pub fn validate_unit_number(unit_number: Option<&str>) -> Result<(), ValidationError> {
    match unit_number {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::MissingUnitNumber),
    }
}

/// Checks a raw password field.
///
/// An empty field reports [`ValidationError::MissingPassword`] so the UI
/// can distinguish "not set up yet" from "typed wrong".
///
/// # Examples
///
/// ```
/// use gatelink_protocol::validation::{validate_password, ValidationError};
///
/// assert!(validate_password("1234").is_ok());
/// assert_eq!(validate_password(""), Err(ValidationError::MissingPassword));
/// assert_eq!(validate_password("12ab"), Err(ValidationError::InvalidPassword));
/// ```
pub fn validate_password(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Password::new(raw)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidPassword)
}

/// Checks a raw slot serial field.
///
/// # Examples
///
/// ```
/// use gatelink_protocol::validation::{validate_serial, ValidationError};
///
/// assert!(validate_serial("007").is_ok());
/// assert_eq!(validate_serial("201"), Err(ValidationError::InvalidSerial));
/// ```
pub fn validate_serial(raw: &str) -> Result<(), ValidationError> {
    Serial::parse(raw)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidSerial)
}

/// Checks a raw phone number field.
pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    PhoneNumber::new(raw)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidPhone)
}

/// Checks that an access window is either absent or has both bounds.
///
/// Presence only; bound format problems surface later when the window
/// is actually parsed into timestamps.
pub fn validate_window(start: Option<&str>, end: Option<&str>) -> Result<(), ValidationError> {
    match (blank_to_none(start), blank_to_none(end)) {
        (None, None) | (Some(_), Some(_)) => Ok(()),
        _ => Err(ValidationError::IncompleteTimeWindow),
    }
}

/// Checks a raw slot range.
pub fn validate_serial_range(start: &str, end: &str) -> Result<(), ValidationError> {
    let start = Serial::parse(start).map_err(|_| ValidationError::InvalidSerial)?;
    let end = Serial::parse(end).map_err(|_| ValidationError::InvalidSerial)?;
    if start > end {
        return Err(ValidationError::InvalidSerialRange);
    }
    Ok(())
}

fn blank_to_none(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
