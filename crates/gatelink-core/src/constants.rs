//! Core constants for the GSM relay command grammar.
//!
//! This module defines the command keywords, field widths, and phone-number
//! prefixes used throughout the Gatelink command codec. These constants ensure
//! the generated SMS bodies exactly match what the relay firmware expects.
//!
//! # Command Structure
//!
//! Every command sent to the device is a plain ASCII SMS body with the shape:
//!
//! ```text
//! {password}{keyword}{field1}#{field2}#...
//! ```
//!
//! Where:
//! - `{password}` - the shared 4-digit device password, always first
//! - `{keyword}` - a fixed command keyword (`CC`, `TEL`, `GOT`, ...)
//! - `#` - field terminator for multi-field commands
//!
//! Single-action commands (`CC`, `DD`, `EE`) carry no fields and no
//! terminator. A doubled terminator (`##`) after a user serial signals slot
//! deletion rather than an empty field.
//!
//! # Keyword Summary
//!
//! | Keyword | Action | Example body |
//! |---------|--------|--------------|
//! | `CC` | Relay on | `1234CC` |
//! | `DD` | Relay off | `1234DD` |
//! | `EE` | Status query | `1234EE` |
//! | `P` | Change password | `1234P5678` |
//! | `TEL` | Set admin number | `1234TEL0061412345678#` |
//! | `A` | User slot add/delete/query | `1234A007#0061412345678#` |
//! | `AL` | User range query | `1234AL001#010#` |
//! | `AUT` / `ALL` | Access mode | `1234AUT#` |
//! | `GOT` | Relay latch time | `1234GOT030#` |
//! | `GON` / `GOFF` | Notification config | `1234GON11#Door Open#` |
//! | `GTEL` | Stop promotional SMS | `1234GTEL#` |
//! | `WHL` / `RHL` | Legacy whitelist add/remove | `1234WHL0061412345678#` |
//!
//! # Usage
//!
//! ```
//! use gatelink_core::constants::*;
//!
//! // Keyword lookup
//! assert_eq!(KEYWORD_RELAY_ON, "CC");
//!
//! // Serial validation
//! fn serial_in_range(n: u16) -> bool {
//!     n >= MIN_SERIAL && n <= MAX_SERIAL
//! }
//! assert!(serial_in_range(7));
//! assert!(!serial_in_range(201));
//! ```
//!
//! # Firmware Compliance
//!
//! These values are fixed by the relay firmware's SMS command grammar.
//! Changing any of them produces commands the device silently ignores.

// ============================================================================
// Command Keywords
// ============================================================================

/// Relay on (open/energize) keyword.
///
/// A bare command with no fields: `{password}CC`.
pub const KEYWORD_RELAY_ON: &str = "CC";

/// Relay off (close/de-energize) keyword.
pub const KEYWORD_RELAY_OFF: &str = "DD";

/// Device status query keyword.
///
/// The device answers with a status SMS; the reply is not parsed here.
pub const KEYWORD_STATUS: &str = "EE";

/// Password change keyword.
///
/// Followed immediately by the new 4-digit password: `{password}P{new}`.
/// This is the only keyword whose payload is not `#`-terminated.
pub const KEYWORD_PASSWORD: &str = "P";

/// Admin/unit number registration keyword.
///
/// # Examples
///
/// ```
/// use gatelink_core::constants::{KEYWORD_ADMIN_NUMBER, SEPARATOR};
///
/// let body = format!("1234{KEYWORD_ADMIN_NUMBER}0061412345678{SEPARATOR}");
/// assert_eq!(body, "1234TEL0061412345678#");
/// ```
pub const KEYWORD_ADMIN_NUMBER: &str = "TEL";

/// User slot keyword.
///
/// Shared by the add, update, delete, and single-query forms; the field
/// pattern after the serial distinguishes them:
///
/// ```text
/// {password}A{serial}#{phone}#              add/update
/// {password}A{serial}#{phone}#{s}#{e}#      add/update with time window
/// {password}A{serial}##                     delete (doubled separator)
/// {password}A{serial}#                      query single slot
/// ```
pub const KEYWORD_USER: &str = "A";

/// User range query keyword.
///
/// Queries a span of slots in one command: `{password}AL{start}#{end}#`.
/// The `L` suffix keeps a two-field range from colliding with the
/// single-slot add/update form.
pub const KEYWORD_USER_RANGE: &str = "AL";

/// Relay latch time keyword.
pub const KEYWORD_LATCH: &str = "GOT";

/// Relay-on notification keyword.
pub const KEYWORD_NOTIFY_ON: &str = "GON";

/// Relay-off notification keyword.
pub const KEYWORD_NOTIFY_OFF: &str = "GOFF";

/// Promotional SMS opt-out keyword.
pub const KEYWORD_STOP_PROMO: &str = "GTEL";

/// Legacy whitelist add keyword.
pub const KEYWORD_WHITELIST_ADD: &str = "WHL";

/// Legacy whitelist remove keyword.
pub const KEYWORD_WHITELIST_REMOVE: &str = "RHL";

// ============================================================================
// Grammar Structure
// ============================================================================

/// Field terminator in multi-field commands.
///
/// Every variable-width field is closed by this character so the firmware
/// can find field boundaries. Consecutive separators (`##`) are meaningful:
/// after a user serial they request slot deletion.
///
/// # Examples
///
/// ```
/// use gatelink_core::constants::SEPARATOR;
///
/// let body = "1234A007#0061412345678#";
/// let fields: Vec<&str> = body[5..].split(SEPARATOR).collect();
/// assert_eq!(fields, vec!["007", "0061412345678", ""]);
/// ```
pub const SEPARATOR: char = '#';

/// Access-mode token restricting the relay to stored callers.
pub const MODE_AUTHORIZED: &str = "AUT";

/// Access-mode token allowing any caller to trigger the relay.
pub const MODE_ALL_CALLERS: &str = "ALL";

// ============================================================================
// Field Widths
// ============================================================================

/// Device password length (characters).
///
/// Passwords are exactly 4 ASCII digits; the firmware rejects anything else.
pub const PASSWORD_LENGTH: usize = 4;

/// User serial field width (zero-padded digits).
///
/// # Examples
///
/// ```
/// use gatelink_core::constants::SERIAL_LENGTH;
///
/// let padded = format!("{:0width$}", 7, width = SERIAL_LENGTH);
/// assert_eq!(padded, "007");
/// ```
pub const SERIAL_LENGTH: usize = 3;

/// Lowest valid user slot.
pub const MIN_SERIAL: u16 = 1;

/// Highest valid user slot.
///
/// The relay stores up to 200 authorized callers.
pub const MAX_SERIAL: u16 = 200;

/// Latch time field width (zero-padded digits).
pub const LATCH_LENGTH: usize = 3;

/// Maximum latch time value.
///
/// See [`LATCH_TOGGLE`] for the special meaning of the top value.
pub const MAX_LATCH_SECONDS: u16 = 999;

/// Digit count of the long (4-digit-year) timestamp encoding: `YYYYMMDDHHMM`.
pub const TIMESTAMP_LONG_LENGTH: usize = 12;

/// Digit count of the short (2-digit-year) timestamp encoding: `YYMMDDHHMM`.
pub const TIMESTAMP_SHORT_LENGTH: usize = 10;

/// Earliest year a device timestamp may carry.
///
/// The short encoding keeps only two year digits, so timestamps are pinned
/// to the century both encodings can represent without aliasing.
pub const TIMESTAMP_YEAR_MIN: u16 = 2000;

/// Latest year a device timestamp may carry.
pub const TIMESTAMP_YEAR_MAX: u16 = 2099;

// ============================================================================
// Latch Semantics
// ============================================================================

/// Latch value for a momentary relay pulse.
///
/// The firmware energizes the relay briefly and releases it on its own.
pub const LATCH_MOMENTARY: u16 = 0;

/// Latch value for toggle mode.
///
/// The relay stays energized until the next trigger call; values between
/// [`LATCH_MOMENTARY`] and this hold the relay for that many seconds.
pub const LATCH_TOGGLE: u16 = 999;

// ============================================================================
// Phone Number Prefixes
// ============================================================================

/// International prefix every normalized number must carry.
///
/// The firmware matches caller IDs against stored numbers in this exact
/// `00` + country-code form.
///
/// # Examples
///
/// ```
/// use gatelink_core::constants::INTERNATIONAL_PREFIX;
///
/// assert!("0061412345678".starts_with(INTERNATIONAL_PREFIX));
/// ```
pub const INTERNATIONAL_PREFIX: &str = "0061";

/// Bare country code without the international call prefix.
pub const COUNTRY_CODE: &str = "61";

/// International call prefix (IDD).
pub const IDD_PREFIX: &str = "00";

/// Local mobile format with trunk prefix (`04xx xxx xxx`).
pub const TRUNK_MOBILE_PREFIX: &str = "04";

/// Mobile prefix with the trunk zero already dropped.
pub const MOBILE_PREFIX: char = '4';

// ============================================================================
// Factory Defaults
// ============================================================================

/// Factory default device password.
///
/// New devices ship with this password; the setup flow urges changing it.
pub const DEFAULT_PASSWORD: &str = "1234";

/// Factory default latch time (momentary pulse).
pub const DEFAULT_LATCH_SECONDS: u16 = 0;

// ============================================================================
// Notification Message Texts
// ============================================================================

/// Fixed firmware text carried by the relay-on notification command.
///
/// The device echoes this text in its notification SMS; it is part of the
/// command grammar, not a display string of this library.
pub const NOTIFY_ON_TEXT: &str = "Door Open";

/// Fixed firmware text carried by the relay-off notification command.
pub const NOTIFY_OFF_TEXT: &str = "Door Close";
