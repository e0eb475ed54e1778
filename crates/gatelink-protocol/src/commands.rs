//! Command kinds understood by the relay firmware.
//!
//! A [`CommandKind`] names an intent and nothing else. The typed payload
//! for an intent lives in [`Command`](crate::Command); raw, possibly
//! half-filled form state lives in [`CommandRequest`](crate::CommandRequest).

use std::fmt;

use serde::{Deserialize, Serialize};

use gatelink_core::constants::{
    KEYWORD_ADMIN_NUMBER, KEYWORD_LATCH, KEYWORD_NOTIFY_OFF, KEYWORD_NOTIFY_ON, KEYWORD_PASSWORD,
    KEYWORD_RELAY_OFF, KEYWORD_RELAY_ON, KEYWORD_STATUS, KEYWORD_STOP_PROMO, KEYWORD_USER,
    KEYWORD_USER_RANGE, KEYWORD_WHITELIST_ADD, KEYWORD_WHITELIST_REMOVE,
};
use gatelink_core::{Error, Result};

/// Every SMS command the device understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    /// Switch the relay on (`CC`)
    RelayOn,
    /// Switch the relay off (`DD`)
    RelayOff,
    /// Ask the device to report relay state (`EE`)
    QueryStatus,
    /// Set a new device password (`P`)
    ChangePassword,
    /// Register the admin number the device reports to (`TEL`)
    SetAdminNumber,
    /// Choose who may trigger the relay by calling (`AUT` / `ALL`)
    SetAccessMode,
    /// Set how long the relay stays latched (`GOT`)
    SetLatchTime,
    /// Store an authorized caller in a numbered slot (`A`)
    AddUser,
    /// Clear a numbered slot (`A` with an empty phone field)
    DeleteUser,
    /// Ask the device what a slot holds (`A` with no phone field)
    QueryUser,
    /// Ask the device to list a slot range (`AL`)
    QueryUserRange,
    /// Configure SMS notifications for relay-on events (`GON`)
    NotifyRelayOn,
    /// Configure SMS notifications for relay-off events (`GOFF`)
    NotifyRelayOff,
    /// Stop promotional messages from the device vendor (`GTEL`)
    StopPromo,
    /// Add a caller to the legacy whitelist (`WHL`)
    WhitelistAdd,
    /// Remove a caller from the legacy whitelist (`RHL`)
    WhitelistRemove,
}

impl CommandKind {
    /// Parses a kind from its stable name (the output of [`Self::name`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] if the name is not recognized.
    pub fn parse_name(s: &str) -> Result<Self> {
        match s {
            "relay-on" => Ok(Self::RelayOn),
            "relay-off" => Ok(Self::RelayOff),
            "query-status" => Ok(Self::QueryStatus),
            "change-password" => Ok(Self::ChangePassword),
            "set-admin-number" => Ok(Self::SetAdminNumber),
            "set-access-mode" => Ok(Self::SetAccessMode),
            "set-latch-time" => Ok(Self::SetLatchTime),
            "add-user" => Ok(Self::AddUser),
            "delete-user" => Ok(Self::DeleteUser),
            "query-user" => Ok(Self::QueryUser),
            "query-user-range" => Ok(Self::QueryUserRange),
            "notify-relay-on" => Ok(Self::NotifyRelayOn),
            "notify-relay-off" => Ok(Self::NotifyRelayOff),
            "stop-promo" => Ok(Self::StopPromo),
            "whitelist-add" => Ok(Self::WhitelistAdd),
            "whitelist-remove" => Ok(Self::WhitelistRemove),
            _ => Err(Error::UnknownCommand {
                name: s.to_string(),
            }),
        }
    }

    /// Returns the stable name for this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RelayOn => "relay-on",
            Self::RelayOff => "relay-off",
            Self::QueryStatus => "query-status",
            Self::ChangePassword => "change-password",
            Self::SetAdminNumber => "set-admin-number",
            Self::SetAccessMode => "set-access-mode",
            Self::SetLatchTime => "set-latch-time",
            Self::AddUser => "add-user",
            Self::DeleteUser => "delete-user",
            Self::QueryUser => "query-user",
            Self::QueryUserRange => "query-user-range",
            Self::NotifyRelayOn => "notify-relay-on",
            Self::NotifyRelayOff => "notify-relay-off",
            Self::StopPromo => "stop-promo",
            Self::WhitelistAdd => "whitelist-add",
            Self::WhitelistRemove => "whitelist-remove",
        }
    }

    /// Returns the fixed keyword this kind puts after the password.
    ///
    /// [`SetAccessMode`](Self::SetAccessMode) has no fixed keyword; its
    /// token is the access mode itself, so it returns `None`.
    #[must_use]
    pub const fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::RelayOn => Some(KEYWORD_RELAY_ON),
            Self::RelayOff => Some(KEYWORD_RELAY_OFF),
            Self::QueryStatus => Some(KEYWORD_STATUS),
            Self::ChangePassword => Some(KEYWORD_PASSWORD),
            Self::SetAdminNumber => Some(KEYWORD_ADMIN_NUMBER),
            Self::SetAccessMode => None,
            Self::SetLatchTime => Some(KEYWORD_LATCH),
            Self::AddUser | Self::DeleteUser | Self::QueryUser => Some(KEYWORD_USER),
            Self::QueryUserRange => Some(KEYWORD_USER_RANGE),
            Self::NotifyRelayOn => Some(KEYWORD_NOTIFY_ON),
            Self::NotifyRelayOff => Some(KEYWORD_NOTIFY_OFF),
            Self::StopPromo => Some(KEYWORD_STOP_PROMO),
            Self::WhitelistAdd => Some(KEYWORD_WHITELIST_ADD),
            Self::WhitelistRemove => Some(KEYWORD_WHITELIST_REMOVE),
        }
    }

    /// Relay switching and status polling
    #[must_use]
    pub const fn is_relay_control(&self) -> bool {
        matches!(self, Self::RelayOn | Self::RelayOff | Self::QueryStatus)
    }

    /// Device configuration (password, admin number, access mode, latch)
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ChangePassword
                | Self::SetAdminNumber
                | Self::SetAccessMode
                | Self::SetLatchTime
        )
    }

    /// Slot management for authorized callers
    #[must_use]
    pub const fn is_user_management(&self) -> bool {
        matches!(
            self,
            Self::AddUser | Self::DeleteUser | Self::QueryUser | Self::QueryUserRange
        )
    }

    /// Notification configuration
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        matches!(
            self,
            Self::NotifyRelayOn | Self::NotifyRelayOff | Self::StopPromo
        )
    }

    /// Legacy whitelist maintenance
    #[must_use]
    pub const fn is_whitelist(&self) -> bool {
        matches!(self, Self::WhitelistAdd | Self::WhitelistRemove)
    }

    /// True for commands that expect the device to reply with data.
    ///
    /// Cuts across the categories above: status polling is relay
    /// control, slot queries are user management.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(
            self,
            Self::QueryStatus | Self::QueryUser | Self::QueryUserRange
        )
    }

    /// True for commands whose encoding carries no `#` separator.
    #[must_use]
    pub const fn is_bare(&self) -> bool {
        matches!(
            self,
            Self::RelayOn | Self::RelayOff | Self::QueryStatus | Self::ChangePassword
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
