//! Integration tests for the end-to-end command composing flow.
//!
//! Each test walks the path a settings form takes:
//! 1. Raw field input → advisory validation
//! 2. Validated form → typed command
//! 3. Typed command → SMS body for the device
//!
//! The live preview is checked against the final body at every step, so
//! the text a user watches while typing is always the text that gets
//! sent.

mod common;

use gatelink_core::{AccessMode, DeviceConfig, Error, NotificationFlags, Password, TimestampStyle};
use gatelink_protocol::{
    CommandBuilder, CommandKind, CommandRequest, ConfigSnapshot, ValidationError,
};

// ============================================================================
// Test Data Constants
// ============================================================================

/// Common test data used across multiple tests
mod test_data {
    /// Primary test phone number, local mobile format
    pub const LOCAL_PHONE: &str = "0412345678";

    /// The same number in the format the device stores
    pub const DEVICE_PHONE: &str = "0061412345678";

    /// Replacement password for rotation flows
    pub const NEW_PASSWORD: &str = "5678";

    /// Access window bounds in the long (12-digit) device format
    pub const WINDOW_START: &str = "202409051000";
    pub const WINDOW_END: &str = "202409051830";
}

// ============================================================================
// Relay Control
// ============================================================================

#[test]
fn test_relay_on_flow() {
    common::assert_request_composes(&CommandRequest::new(CommandKind::RelayOn), "1234CC");
}

#[test]
fn test_relay_off_flow() {
    common::assert_request_composes(&CommandRequest::new(CommandKind::RelayOff), "1234DD");
}

#[test]
fn test_query_status_flow() {
    common::assert_request_composes(&CommandRequest::new(CommandKind::QueryStatus), "1234EE");
}

// ============================================================================
// Device Configuration
// ============================================================================

#[test]
fn test_change_password_flow() {
    use test_data::*;

    let request = CommandRequest::new(CommandKind::ChangePassword).new_password(NEW_PASSWORD);
    common::assert_request_composes(&request, "1234P5678");
}

#[test]
fn test_set_admin_number_normalizes_local_format() {
    let request = CommandRequest::new(CommandKind::SetAdminNumber).phone("0412 345 678");
    common::assert_request_composes(&request, "1234TEL0061412345678#");
}

#[test]
fn test_set_access_mode_flows() {
    let authorized = CommandRequest::new(CommandKind::SetAccessMode).mode(AccessMode::Authorized);
    common::assert_request_composes(&authorized, "1234AUT#");

    let all_callers = CommandRequest::new(CommandKind::SetAccessMode).mode(AccessMode::AllCallers);
    common::assert_request_composes(&all_callers, "1234ALL#");
}

#[test]
fn test_set_latch_time_pads_input() {
    let request = CommandRequest::new(CommandKind::SetLatchTime).latch("30");
    common::assert_request_composes(&request, "1234GOT030#");
}

#[test]
fn test_set_latch_time_extremes() {
    let momentary = CommandRequest::new(CommandKind::SetLatchTime).latch("0");
    common::assert_request_composes(&momentary, "1234GOT000#");

    let toggle = CommandRequest::new(CommandKind::SetLatchTime).latch("999");
    common::assert_request_composes(&toggle, "1234GOT999#");
}

// ============================================================================
// User Slot Management
// ============================================================================

#[test]
fn test_add_user_flow() {
    use test_data::*;

    let request = CommandRequest::new(CommandKind::AddUser)
        .serial("7")
        .phone(LOCAL_PHONE);
    common::assert_request_composes(&request, "1234A007#0061412345678#");
}

#[test]
fn test_add_user_accepts_international_input() {
    use test_data::*;

    // Input already carrying the country code lands in the same shape.
    let request = CommandRequest::new(CommandKind::AddUser)
        .serial("7")
        .phone("61412345678");
    common::assert_request_composes(&request, &format!("1234A007#{DEVICE_PHONE}#"));
}

#[test]
fn test_add_user_with_window_flow() {
    use test_data::*;

    let request = CommandRequest::new(CommandKind::AddUser)
        .serial("7")
        .phone(LOCAL_PHONE)
        .window_start(WINDOW_START)
        .window_end(WINDOW_END);
    common::assert_request_composes(
        &request,
        "1234A007#0061412345678#202409051000#202409051830#",
    );
}

#[test]
fn test_add_user_with_short_window_style() {
    use test_data::*;

    let request = CommandRequest::new(CommandKind::AddUser)
        .serial("7")
        .phone(LOCAL_PHONE)
        .style(TimestampStyle::Short)
        .window_start("2409051000")
        .window_end("2409051830");
    common::assert_request_composes(
        &request,
        "1234A007#0061412345678#2409051000#2409051830#",
    );
}

#[test]
fn test_delete_user_flow() {
    let request = CommandRequest::new(CommandKind::DeleteUser).serial("12");
    common::assert_request_composes(&request, "1234A012##");
}

#[test]
fn test_query_user_flow() {
    let request = CommandRequest::new(CommandKind::QueryUser).serial("3");
    common::assert_request_composes(&request, "1234A003#");
}

#[test]
fn test_query_user_range_flow() {
    let request = CommandRequest::new(CommandKind::QueryUserRange)
        .serial("1")
        .serial_end("10");
    common::assert_request_composes(&request, "1234AL001#010#");
}

#[test]
fn test_user_slot_bounds() {
    use test_data::*;

    let first = CommandRequest::new(CommandKind::AddUser)
        .serial("1")
        .phone(LOCAL_PHONE);
    common::assert_request_composes(&first, &format!("1234A001#{DEVICE_PHONE}#"));

    let last = CommandRequest::new(CommandKind::AddUser)
        .serial("200")
        .phone(LOCAL_PHONE);
    common::assert_request_composes(&last, &format!("1234A200#{DEVICE_PHONE}#"));
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_notify_relay_on_both_recipients() {
    let request = CommandRequest::new(CommandKind::NotifyRelayOn).flags(NotificationFlags {
        admin: true,
        caller: true,
    });
    common::assert_request_composes(&request, "1234GON11#Door Open#");
}

#[test]
fn test_notify_relay_on_admin_only() {
    let request = CommandRequest::new(CommandKind::NotifyRelayOn).flags(NotificationFlags {
        admin: true,
        caller: false,
    });
    common::assert_request_composes(&request, "1234GON10#Door Open#");
}

#[test]
fn test_notify_relay_off_caller_only() {
    let request = CommandRequest::new(CommandKind::NotifyRelayOff).flags(NotificationFlags {
        admin: false,
        caller: true,
    });
    common::assert_request_composes(&request, "1234GOFF01#Door Close#");
}

#[test]
fn test_notify_disables_when_no_recipients() {
    // No recipients collapses to the dedicated disable form.
    let on = CommandRequest::new(CommandKind::NotifyRelayOn);
    common::assert_request_composes(&on, "1234GON##");

    let off = CommandRequest::new(CommandKind::NotifyRelayOff);
    common::assert_request_composes(&off, "1234GOFF##");
}

#[test]
fn test_stop_promo_flow() {
    common::assert_request_composes(&CommandRequest::new(CommandKind::StopPromo), "1234GTEL#");
}

// ============================================================================
// Legacy Whitelist
// ============================================================================

#[test]
fn test_whitelist_flows() {
    use test_data::*;

    let add = CommandRequest::new(CommandKind::WhitelistAdd).phone(LOCAL_PHONE);
    common::assert_request_composes(&add, &format!("1234WHL{DEVICE_PHONE}#"));

    let remove = CommandRequest::new(CommandKind::WhitelistRemove).phone(LOCAL_PHONE);
    common::assert_request_composes(&remove, &format!("1234RHL{DEVICE_PHONE}#"));
}

// ============================================================================
// Advisory Validation
// ============================================================================

#[test]
fn test_unconfigured_device_reports_unit_first() {
    // A factory-fresh configuration has a password but no unit number.
    let config = DeviceConfig::default();
    let snapshot = ConfigSnapshot::of(&config);
    let request = CommandRequest::new(CommandKind::RelayOn);
    common::assert_validation_tag(&request, &snapshot, ValidationError::MissingUnitNumber);
}

#[test]
fn test_bad_password_rejected_regardless_of_fields() {
    use test_data::*;

    // A complete, correct add-user form still fails on the snapshot.
    let request = CommandRequest::new(CommandKind::AddUser)
        .serial("7")
        .phone(LOCAL_PHONE);

    let short = ConfigSnapshot {
        password: "123",
        unit_number: Some(common::TEST_UNIT_NUMBER),
    };
    common::assert_validation_tag(&request, &short, ValidationError::InvalidPassword);

    let empty = ConfigSnapshot {
        password: "",
        unit_number: Some(common::TEST_UNIT_NUMBER),
    };
    common::assert_validation_tag(&request, &empty, ValidationError::MissingPassword);
}

#[test]
fn test_add_user_rejects_bad_serials() {
    use test_data::*;

    let snapshot = common::test_snapshot();
    for bad in ["0", "201", "abc", ""] {
        let request = CommandRequest::new(CommandKind::AddUser)
            .serial(bad)
            .phone(LOCAL_PHONE);
        common::assert_validation_tag(&request, &snapshot, ValidationError::InvalidSerial);
    }
}

#[test]
fn test_add_user_rejects_empty_phone() {
    let snapshot = common::test_snapshot();
    let request = CommandRequest::new(CommandKind::AddUser).serial("7");
    common::assert_validation_tag(&request, &snapshot, ValidationError::InvalidPhone);
}

#[test]
fn test_half_window_rejected() {
    use test_data::*;

    let snapshot = common::test_snapshot();
    let request = CommandRequest::new(CommandKind::AddUser)
        .serial("7")
        .phone(LOCAL_PHONE)
        .window_start(WINDOW_START);
    common::assert_validation_tag(&request, &snapshot, ValidationError::IncompleteTimeWindow);
}

#[test]
fn test_backwards_range_rejected() {
    let snapshot = common::test_snapshot();
    let request = CommandRequest::new(CommandKind::QueryUserRange)
        .serial("10")
        .serial_end("1");
    common::assert_validation_tag(&request, &snapshot, ValidationError::InvalidSerialRange);
}

// ============================================================================
// Strict Resolution
// ============================================================================

#[test]
fn test_resolve_requires_phone() {
    let request = CommandRequest::new(CommandKind::SetAdminNumber);
    let err = request.resolve().unwrap_err();
    assert!(matches!(err, Error::MissingField { field: "phone" }));
}

#[test]
fn test_malformed_window_bound_keeps_input() {
    use test_data::*;

    let request = CommandRequest::new(CommandKind::AddUser)
        .serial("7")
        .phone(LOCAL_PHONE)
        .window_start("2024-09-05 10:00")
        .window_end(WINDOW_END);

    match request.resolve().unwrap_err() {
        Error::MalformedTimestamp { value, .. } => assert_eq!(value, "2024-09-05 10:00"),
        other => panic!("expected MalformedTimestamp, got {other}"),
    }
}

// ============================================================================
// Device Lifecycle Flows
// ============================================================================

#[test]
fn test_device_commissioning_flow() {
    use test_data::*;

    // A new device keeps its factory password; the installer registers
    // the admin number, locks access down, sets the latch and loads the
    // first two slots.
    common::assert_request_composes(
        &CommandRequest::new(CommandKind::SetAdminNumber).phone(LOCAL_PHONE),
        &format!("1234TEL{DEVICE_PHONE}#"),
    );
    common::assert_request_composes(
        &CommandRequest::new(CommandKind::SetAccessMode).mode(AccessMode::Authorized),
        "1234AUT#",
    );
    common::assert_request_composes(
        &CommandRequest::new(CommandKind::SetLatchTime).latch("5"),
        "1234GOT005#",
    );
    common::assert_request_composes(
        &CommandRequest::new(CommandKind::AddUser)
            .serial("1")
            .phone(LOCAL_PHONE),
        &format!("1234A001#{DEVICE_PHONE}#"),
    );
    common::assert_request_composes(
        &CommandRequest::new(CommandKind::AddUser)
            .serial("2")
            .phone("0498765432"),
        "1234A002#0061498765432#",
    );
}

#[test]
fn test_password_rotation_flow() {
    use test_data::*;

    // The change command is signed with the old password.
    let change = CommandRequest::new(CommandKind::ChangePassword).new_password(NEW_PASSWORD);
    common::assert_request_composes(&change, "1234P5678");

    // Once the device accepts, later commands sign with the new one.
    let rotated = CommandBuilder::new(Password::new(NEW_PASSWORD).unwrap());
    assert_eq!(rotated.relay_on(), "5678CC");

    // A builder holding the old password is unaffected by the rotation.
    let stale = CommandBuilder::new(common::test_password());
    assert_eq!(stale.relay_on(), "1234CC");
}

#[test]
fn test_visitor_window_flow() {
    use test_data::*;

    // A visitor gets a slot bounded to one day, then the slot is cleared.
    let grant = CommandRequest::new(CommandKind::AddUser)
        .serial("42")
        .phone(LOCAL_PHONE)
        .window_start(WINDOW_START)
        .window_end(WINDOW_END);
    common::assert_request_composes(
        &grant,
        "1234A042#0061412345678#202409051000#202409051830#",
    );

    let revoke = CommandRequest::new(CommandKind::DeleteUser).serial("42");
    common::assert_request_composes(&revoke, "1234A042##");
}

// ============================================================================
// Builder Parity
// ============================================================================

#[test]
fn test_builder_and_request_agree() {
    use test_data::*;

    let builder = CommandBuilder::new(common::test_password());
    let phone = common::test_phone(LOCAL_PHONE);

    let via_builder = builder.add_user_with_window(
        common::test_serial(7),
        &phone,
        common::test_window(),
        TimestampStyle::Long,
    );

    let via_request = CommandRequest::new(CommandKind::AddUser)
        .serial("7")
        .phone(LOCAL_PHONE)
        .window_start(WINDOW_START)
        .window_end(WINDOW_END)
        .resolve()
        .unwrap()
        .encode(&common::test_password());

    assert_eq!(via_builder, via_request);
}

#[test]
fn test_builder_from_stored_config() {
    let config = DeviceConfig::default();
    let builder = CommandBuilder::for_config(&config);
    assert_eq!(builder.query_status(), "1234EE");
}
