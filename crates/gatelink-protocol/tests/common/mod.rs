//! Common test utilities for integration tests.
//!
//! # Assertion Helper Philosophy
//!
//! The helpers follow a three-tier design:
//!
//! 1. **Creation helpers** (`test_*`) - Build validated domain values
//! 2. **Assertion helpers** (`assert_validation_tag`) - Check a single
//!    advisory outcome
//! 3. **Flow helpers** (`assert_request_composes`) - Walk one request
//!    through validate, resolve, encode and preview in a single call
//!
//! Flow helpers pin the preview to the encoded output, so any drift
//! between the lenient preview path and the strict encode path fails
//! every test that uses them.

// Each integration binary compiles this module separately and uses a
// subset of it.
#![allow(dead_code)]

use gatelink_core::{DeviceTimestamp, Password, PhoneNumber, Serial, TimeWindow};
use gatelink_protocol::{CommandRequest, ConfigSnapshot, ValidationError};

/// Device password used across tests.
pub const TEST_PASSWORD: &str = "1234";

/// Device (unit) phone number used across tests.
pub const TEST_UNIT_NUMBER: &str = "0412000000";

/// Snapshot of a fully configured device.
pub fn test_snapshot() -> ConfigSnapshot<'static> {
    ConfigSnapshot {
        password: TEST_PASSWORD,
        unit_number: Some(TEST_UNIT_NUMBER),
    }
}

/// The typed password matching [`test_snapshot`].
pub fn test_password() -> Password {
    Password::new(TEST_PASSWORD).expect("Test helper: invalid device password")
}

/// Parse a phone number, panicking on inputs a test should not use.
pub fn test_phone(raw: &str) -> PhoneNumber {
    PhoneNumber::new(raw).expect("Test helper: invalid phone number")
}

/// Build a slot serial, panicking outside 1-200.
pub fn test_serial(n: u16) -> Serial {
    Serial::new(n).expect("Test helper: serial must be 1-200")
}

/// Standard access window used across tests (2024-09-05, 10:00-18:30).
pub fn test_window() -> TimeWindow {
    TimeWindow::new(
        DeviceTimestamp::new(2024, 9, 5, 10, 0).expect("Test helper: invalid window start"),
        DeviceTimestamp::new(2024, 9, 5, 18, 30).expect("Test helper: invalid window end"),
    )
}

/// Assert a request flows through the entire composing path.
///
/// Checks, in order:
/// 1. Advisory validation passes against the standard snapshot
/// 2. The request resolves into a typed command of the same kind
/// 3. The command encodes to `expected`
/// 4. The live preview equals the encoded output
///
/// # Panics
///
/// Panics with a step-specific message if any stage disagrees.
pub fn assert_request_composes(request: &CommandRequest, expected: &str) {
    let snapshot = test_snapshot();

    if let Err(tag) = request.validate(&snapshot) {
        panic!("{} failed advisory validation: {tag}", request.kind());
    }

    let command = request
        .resolve()
        .unwrap_or_else(|e| panic!("{} failed to resolve: {e}", request.kind()));
    assert_eq!(
        command.kind(),
        request.kind(),
        "resolved command changed kind"
    );

    let encoded = command.encode(&test_password());
    assert_eq!(encoded, expected, "encoding mismatch for {}", request.kind());

    assert_eq!(
        request.preview(&snapshot),
        encoded,
        "preview drifted from encoding for {}",
        request.kind()
    );
}

/// Assert advisory validation fails with exactly the given tag.
///
/// # Panics
///
/// Panics if validation passes or reports a different tag.
pub fn assert_validation_tag(
    request: &CommandRequest,
    snapshot: &ConfigSnapshot<'_>,
    expected: ValidationError,
) {
    assert_eq!(
        request.validate(snapshot),
        Err(expected),
        "unexpected validation outcome for {}",
        request.kind()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatelink_protocol::CommandKind;

    #[test]
    fn test_snapshot_is_fully_configured() {
        let snapshot = test_snapshot();
        assert_eq!(snapshot.password, "1234");
        assert_eq!(snapshot.unit_number, Some("0412000000"));
    }

    #[test]
    fn test_assert_request_composes() {
        let request = CommandRequest::new(CommandKind::RelayOn);
        assert_request_composes(&request, "1234CC");
    }

    #[test]
    fn test_assert_validation_tag() {
        let request = CommandRequest::new(CommandKind::RelayOn);
        let snapshot = ConfigSnapshot {
            password: "1234",
            unit_number: None,
        };
        assert_validation_tag(&request, &snapshot, ValidationError::MissingUnitNumber);
    }

    #[test]
    fn test_window_bounds_are_ordered() {
        let window = test_window();
        assert!(window.start <= window.end);
    }
}
