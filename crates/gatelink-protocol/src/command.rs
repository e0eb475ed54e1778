//! Typed commands and their wire encoding.
//!
//! A [`Command`] carries fully validated payloads from `gatelink-core`.
//! [`Command::encode`] is the single place command strings are built;
//! everything else (builder, requests, previews) funnels through it.

use gatelink_core::constants::{
    KEYWORD_ADMIN_NUMBER, KEYWORD_LATCH, KEYWORD_NOTIFY_OFF, KEYWORD_NOTIFY_ON, KEYWORD_PASSWORD,
    KEYWORD_RELAY_OFF, KEYWORD_RELAY_ON, KEYWORD_STATUS, KEYWORD_STOP_PROMO, KEYWORD_USER,
    KEYWORD_USER_RANGE, KEYWORD_WHITELIST_ADD, KEYWORD_WHITELIST_REMOVE, NOTIFY_OFF_TEXT,
    NOTIFY_ON_TEXT, SEPARATOR,
};
use gatelink_core::{
    AccessMode, LatchTime, NotificationFlags, Password, PhoneNumber, Serial, SerialRange,
    TimeWindow, TimestampStyle,
};

use crate::commands::CommandKind;

/// A fully resolved command, ready to encode.
///
/// Payloads are the validated types from `gatelink-core`, so a value of
/// this enum always encodes to a string the firmware accepts. The device
/// password is deliberately not part of the command; it is supplied at
/// encode time so one command value can be replayed against a device
/// whose password has changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `{password}CC`
    RelayOn,
    /// `{password}DD`
    RelayOff,
    /// `{password}EE`
    QueryStatus,
    /// `{password}P{new_password}`
    ChangePassword { new_password: Password },
    /// `{password}TEL{phone}#`
    SetAdminNumber { phone: PhoneNumber },
    /// `{password}AUT#` or `{password}ALL#`
    SetAccessMode { mode: AccessMode },
    /// `{password}GOT{ttt}#`
    SetLatchTime { latch: LatchTime },
    /// `{password}A{sss}#{phone}#` with an optional `{start}#{end}#` tail.
    ///
    /// `style` picks the timestamp digits for the window bounds; it has
    /// no effect when `window` is `None`.
    AddUser {
        serial: Serial,
        phone: PhoneNumber,
        window: Option<TimeWindow>,
        style: TimestampStyle,
    },
    /// `{password}A{sss}##`
    DeleteUser { serial: Serial },
    /// `{password}A{sss}#`
    QueryUser { serial: Serial },
    /// `{password}AL{sss}#{eee}#`
    QueryUserRange { range: SerialRange },
    /// `{password}GON{a}{c}#Door Open#`, or `{password}GON##` when both
    /// flags are off
    NotifyRelayOn { flags: NotificationFlags },
    /// `{password}GOFF{a}{c}#Door Close#`, or `{password}GOFF##` when
    /// both flags are off
    NotifyRelayOff { flags: NotificationFlags },
    /// `{password}GTEL#`
    StopPromo,
    /// `{password}WHL{phone}#`
    WhitelistAdd { phone: PhoneNumber },
    /// `{password}RHL{phone}#`
    WhitelistRemove { phone: PhoneNumber },
}

impl Command {
    /// Builds an add-user command with the canonical long window style.
    #[must_use]
    pub fn add_user(serial: Serial, phone: PhoneNumber, window: Option<TimeWindow>) -> Self {
        Self::AddUser {
            serial,
            phone,
            window,
            style: TimestampStyle::Long,
        }
    }

    /// Returns the kind of this command.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::RelayOn => CommandKind::RelayOn,
            Self::RelayOff => CommandKind::RelayOff,
            Self::QueryStatus => CommandKind::QueryStatus,
            Self::ChangePassword { .. } => CommandKind::ChangePassword,
            Self::SetAdminNumber { .. } => CommandKind::SetAdminNumber,
            Self::SetAccessMode { .. } => CommandKind::SetAccessMode,
            Self::SetLatchTime { .. } => CommandKind::SetLatchTime,
            Self::AddUser { .. } => CommandKind::AddUser,
            Self::DeleteUser { .. } => CommandKind::DeleteUser,
            Self::QueryUser { .. } => CommandKind::QueryUser,
            Self::QueryUserRange { .. } => CommandKind::QueryUserRange,
            Self::NotifyRelayOn { .. } => CommandKind::NotifyRelayOn,
            Self::NotifyRelayOff { .. } => CommandKind::NotifyRelayOff,
            Self::StopPromo => CommandKind::StopPromo,
            Self::WhitelistAdd { .. } => CommandKind::WhitelistAdd,
            Self::WhitelistRemove { .. } => CommandKind::WhitelistRemove,
        }
    }

    /// Encodes this command as the SMS body the firmware expects.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatelink_core::{Password, PhoneNumber, Serial};
    /// use gatelink_protocol::Command;
    ///
    /// let password = Password::new("1234").unwrap();
    /// let phone = PhoneNumber::new("0412 345 678").unwrap();
    /// let cmd = Command::add_user(Serial::new(7).unwrap(), phone, None);
    /// assert_eq!(cmd.encode(&password), "1234A007#0061412345678#");
    /// ```
    #[must_use]
    pub fn encode(&self, password: &Password) -> String {
        match self {
            Self::RelayOn => format!("{password}{KEYWORD_RELAY_ON}"),
            Self::RelayOff => format!("{password}{KEYWORD_RELAY_OFF}"),
            Self::QueryStatus => format!("{password}{KEYWORD_STATUS}"),
            Self::ChangePassword { new_password } => {
                format!("{password}{KEYWORD_PASSWORD}{new_password}")
            }
            Self::SetAdminNumber { phone } => {
                format!("{password}{KEYWORD_ADMIN_NUMBER}{phone}{SEPARATOR}")
            }
            Self::SetAccessMode { mode } => format!("{password}{mode}{SEPARATOR}"),
            Self::SetLatchTime { latch } => {
                format!("{password}{KEYWORD_LATCH}{latch}{SEPARATOR}")
            }
            Self::AddUser {
                serial,
                phone,
                window,
                style,
            } => match window {
                Some(window) => {
                    let start = window.start.format(*style);
                    let end = window.end.format(*style);
                    format!(
                        "{password}{KEYWORD_USER}{serial}{SEPARATOR}{phone}{SEPARATOR}\
                         {start}{SEPARATOR}{end}{SEPARATOR}"
                    )
                }
                None => format!("{password}{KEYWORD_USER}{serial}{SEPARATOR}{phone}{SEPARATOR}"),
            },
            Self::DeleteUser { serial } => {
                format!("{password}{KEYWORD_USER}{serial}{SEPARATOR}{SEPARATOR}")
            }
            Self::QueryUser { serial } => {
                format!("{password}{KEYWORD_USER}{serial}{SEPARATOR}")
            }
            Self::QueryUserRange { range } => {
                let start = range.start();
                let end = range.end();
                format!("{password}{KEYWORD_USER_RANGE}{start}{SEPARATOR}{end}{SEPARATOR}")
            }
            Self::NotifyRelayOn { flags } => {
                encode_notify(password, KEYWORD_NOTIFY_ON, *flags, NOTIFY_ON_TEXT)
            }
            Self::NotifyRelayOff { flags } => {
                encode_notify(password, KEYWORD_NOTIFY_OFF, *flags, NOTIFY_OFF_TEXT)
            }
            Self::StopPromo => format!("{password}{KEYWORD_STOP_PROMO}{SEPARATOR}"),
            Self::WhitelistAdd { phone } => {
                format!("{password}{KEYWORD_WHITELIST_ADD}{phone}{SEPARATOR}")
            }
            Self::WhitelistRemove { phone } => {
                format!("{password}{KEYWORD_WHITELIST_REMOVE}{phone}{SEPARATOR}")
            }
        }
    }
}

/// Notification commands collapse to the disable form when no recipient
/// flag is set; the firmware never sees `GON00#...#`.
fn encode_notify(
    password: &Password,
    keyword: &str,
    flags: NotificationFlags,
    text: &str,
) -> String {
    if flags.any() {
        let bits = flags.encode_bits();
        format!("{password}{keyword}{bits}{SEPARATOR}{text}{SEPARATOR}")
    } else {
        format!("{password}{keyword}{SEPARATOR}{SEPARATOR}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatelink_core::DeviceTimestamp;
    use rstest::rstest;

    fn pwd() -> Password {
        Password::new("1234").unwrap()
    }

    fn phone(raw: &str) -> PhoneNumber {
        PhoneNumber::new(raw).unwrap()
    }

    fn serial(n: u16) -> Serial {
        Serial::new(n).unwrap()
    }

    #[rstest]
    #[case(Command::RelayOn, "1234CC")]
    #[case(Command::RelayOff, "1234DD")]
    #[case(Command::QueryStatus, "1234EE")]
    #[case(Command::StopPromo, "1234GTEL#")]
    fn test_encode_fixed_commands(#[case] cmd: Command, #[case] expected: &str) {
        assert_eq!(cmd.encode(&pwd()), expected);
    }

    #[test]
    fn test_encode_change_password() {
        let cmd = Command::ChangePassword {
            new_password: Password::new("5678").unwrap(),
        };
        assert_eq!(cmd.encode(&pwd()), "1234P5678");
    }

    #[test]
    fn test_encode_set_admin_number() {
        let cmd = Command::SetAdminNumber {
            phone: phone("0412345678"),
        };
        assert_eq!(cmd.encode(&pwd()), "1234TEL0061412345678#");
    }

    #[rstest]
    #[case(AccessMode::Authorized, "1234AUT#")]
    #[case(AccessMode::AllCallers, "1234ALL#")]
    fn test_encode_access_mode(#[case] mode: AccessMode, #[case] expected: &str) {
        let cmd = Command::SetAccessMode { mode };
        assert_eq!(cmd.encode(&pwd()), expected);
    }

    #[rstest]
    #[case(30, "1234GOT030#")]
    #[case(0, "1234GOT000#")]
    #[case(999, "1234GOT999#")]
    fn test_encode_latch_time(#[case] secs: u16, #[case] expected: &str) {
        let cmd = Command::SetLatchTime {
            latch: LatchTime::new(secs).unwrap(),
        };
        assert_eq!(cmd.encode(&pwd()), expected);
    }

    #[test]
    fn test_encode_add_user_without_window() {
        let cmd = Command::add_user(serial(7), phone("0412345678"), None);
        assert_eq!(cmd.encode(&pwd()), "1234A007#0061412345678#");
    }

    #[test]
    fn test_encode_add_user_with_long_window() {
        let window = TimeWindow::new(
            DeviceTimestamp::new(2024, 9, 5, 10, 0).unwrap(),
            DeviceTimestamp::new(2024, 9, 5, 18, 30).unwrap(),
        );
        let cmd = Command::add_user(serial(7), phone("0412345678"), Some(window));
        assert_eq!(
            cmd.encode(&pwd()),
            "1234A007#0061412345678#202409051000#202409051830#"
        );
    }

    #[test]
    fn test_encode_add_user_with_short_window() {
        let window = TimeWindow::new(
            DeviceTimestamp::new(2024, 9, 5, 10, 0).unwrap(),
            DeviceTimestamp::new(2024, 9, 5, 18, 30).unwrap(),
        );
        let cmd = Command::AddUser {
            serial: serial(7),
            phone: phone("0412345678"),
            window: Some(window),
            style: TimestampStyle::Short,
        };
        assert_eq!(
            cmd.encode(&pwd()),
            "1234A007#0061412345678#2409051000#2409051830#"
        );
    }

    #[test]
    fn test_encode_delete_user() {
        let cmd = Command::DeleteUser { serial: serial(12) };
        assert_eq!(cmd.encode(&pwd()), "1234A012##");
    }

    #[test]
    fn test_encode_query_user() {
        let cmd = Command::QueryUser { serial: serial(3) };
        assert_eq!(cmd.encode(&pwd()), "1234A003#");
    }

    #[test]
    fn test_encode_query_user_range() {
        let cmd = Command::QueryUserRange {
            range: SerialRange::new(serial(1), serial(10)).unwrap(),
        };
        assert_eq!(cmd.encode(&pwd()), "1234AL001#010#");
    }

    #[rstest]
    #[case(true, true, "1234GON11#Door Open#")]
    #[case(true, false, "1234GON10#Door Open#")]
    #[case(false, true, "1234GON01#Door Open#")]
    #[case(false, false, "1234GON##")]
    fn test_encode_notify_relay_on(#[case] admin: bool, #[case] caller: bool, #[case] expected: &str) {
        let cmd = Command::NotifyRelayOn {
            flags: NotificationFlags { admin, caller },
        };
        assert_eq!(cmd.encode(&pwd()), expected);
    }

    #[rstest]
    #[case(true, false, "1234GOFF10#Door Close#")]
    #[case(false, false, "1234GOFF##")]
    fn test_encode_notify_relay_off(#[case] admin: bool, #[case] caller: bool, #[case] expected: &str) {
        let cmd = Command::NotifyRelayOff {
            flags: NotificationFlags { admin, caller },
        };
        assert_eq!(cmd.encode(&pwd()), expected);
    }

    #[rstest]
    #[case(Command::WhitelistAdd { phone: PhoneNumber::new("0412345678").unwrap() }, "1234WHL0061412345678#")]
    #[case(Command::WhitelistRemove { phone: PhoneNumber::new("0412345678").unwrap() }, "1234RHL0061412345678#")]
    fn test_encode_whitelist(#[case] cmd: Command, #[case] expected: &str) {
        assert_eq!(cmd.encode(&pwd()), expected);
    }

    #[test]
    fn test_encode_uses_caller_password() {
        let other = Password::new("9999").unwrap();
        assert_eq!(Command::RelayOn.encode(&other), "9999CC");
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(Command::RelayOn.kind(), CommandKind::RelayOn);
        assert_eq!(
            Command::DeleteUser { serial: serial(1) }.kind(),
            CommandKind::DeleteUser
        );
        assert_eq!(
            Command::add_user(serial(1), phone("0412345678"), None).kind(),
            CommandKind::AddUser
        );
        assert_eq!(
            Command::NotifyRelayOff {
                flags: NotificationFlags::default()
            }
            .kind(),
            CommandKind::NotifyRelayOff
        );
    }

    #[test]
    fn test_bare_kinds_encode_without_separator() {
        let samples = [
            Command::RelayOn,
            Command::RelayOff,
            Command::QueryStatus,
            Command::ChangePassword {
                new_password: Password::new("0000").unwrap(),
            },
        ];
        for cmd in samples {
            assert!(cmd.kind().is_bare());
            assert!(!cmd.encode(&pwd()).contains('#'));
        }
    }
}
