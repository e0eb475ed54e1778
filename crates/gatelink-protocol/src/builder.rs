//! One-stop builder for composing command strings.

use gatelink_core::{
    AccessMode, DeviceConfig, LatchTime, NotificationFlags, Password, PhoneNumber, Serial,
    SerialRange, TimeWindow, TimestampStyle,
};

use crate::command::Command;

/// Composes command strings for the device addressed by one password.
///
/// Each method maps a user intent to its wire form through
/// [`Command::encode`], so the grammar lives in exactly one place. The
/// builder never touches stored configuration; persisting the effect of
/// a command (a changed password, a new slot) is the caller's job, done
/// after the command has been composed and handed to a dispatcher.
///
/// # Examples
///
/// ```
/// use gatelink_core::{Password, Serial};
/// use gatelink_protocol::CommandBuilder;
///
/// let builder = CommandBuilder::new(Password::new("1234").unwrap());
/// assert_eq!(builder.relay_on(), "1234CC");
/// assert_eq!(builder.delete_user(Serial::new(12).unwrap()), "1234A012##");
/// ```
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    password: Password,
}

impl CommandBuilder {
    /// Create a builder for the device with the given password.
    #[must_use]
    pub const fn new(password: Password) -> Self {
        Self { password }
    }

    /// Create a builder from a stored configuration snapshot.
    #[must_use]
    pub fn for_config(config: &DeviceConfig) -> Self {
        Self::new(config.password.clone())
    }

    /// The password this builder signs commands with.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// `{password}CC`
    #[must_use]
    pub fn relay_on(&self) -> String {
        Command::RelayOn.encode(&self.password)
    }

    /// `{password}DD`
    #[must_use]
    pub fn relay_off(&self) -> String {
        Command::RelayOff.encode(&self.password)
    }

    /// `{password}EE`
    #[must_use]
    pub fn query_status(&self) -> String {
        Command::QueryStatus.encode(&self.password)
    }

    /// `{password}P{new_password}`
    ///
    /// The builder keeps signing with its current password; switch to a
    /// new builder once the device has accepted the change.
    #[must_use]
    pub fn change_password(&self, new_password: &Password) -> String {
        Command::ChangePassword {
            new_password: new_password.clone(),
        }
        .encode(&self.password)
    }

    /// `{password}TEL{phone}#`
    #[must_use]
    pub fn set_admin_number(&self, phone: &PhoneNumber) -> String {
        Command::SetAdminNumber {
            phone: phone.clone(),
        }
        .encode(&self.password)
    }

    /// `{password}AUT#` or `{password}ALL#`
    #[must_use]
    pub fn set_access_mode(&self, mode: AccessMode) -> String {
        Command::SetAccessMode { mode }.encode(&self.password)
    }

    /// `{password}GOT{ttt}#`
    #[must_use]
    pub fn set_latch_time(&self, latch: LatchTime) -> String {
        Command::SetLatchTime { latch }.encode(&self.password)
    }

    /// `{password}A{sss}#{phone}#`
    #[must_use]
    pub fn add_user(&self, serial: Serial, phone: &PhoneNumber) -> String {
        Command::add_user(serial, phone.clone(), None).encode(&self.password)
    }

    /// `{password}A{sss}#{phone}#{start}#{end}#`
    #[must_use]
    pub fn add_user_with_window(
        &self,
        serial: Serial,
        phone: &PhoneNumber,
        window: TimeWindow,
        style: TimestampStyle,
    ) -> String {
        Command::AddUser {
            serial,
            phone: phone.clone(),
            window: Some(window),
            style,
        }
        .encode(&self.password)
    }

    /// `{password}A{sss}##`
    #[must_use]
    pub fn delete_user(&self, serial: Serial) -> String {
        Command::DeleteUser { serial }.encode(&self.password)
    }

    /// `{password}A{sss}#`
    #[must_use]
    pub fn query_user(&self, serial: Serial) -> String {
        Command::QueryUser { serial }.encode(&self.password)
    }

    /// `{password}AL{sss}#{eee}#`
    #[must_use]
    pub fn query_user_range(&self, range: SerialRange) -> String {
        Command::QueryUserRange { range }.encode(&self.password)
    }

    /// `{password}GON{a}{c}#Door Open#`, or `{password}GON##` to disable
    #[must_use]
    pub fn notify_relay_on(&self, flags: NotificationFlags) -> String {
        Command::NotifyRelayOn { flags }.encode(&self.password)
    }

    /// `{password}GOFF{a}{c}#Door Close#`, or `{password}GOFF##` to disable
    #[must_use]
    pub fn notify_relay_off(&self, flags: NotificationFlags) -> String {
        Command::NotifyRelayOff { flags }.encode(&self.password)
    }

    /// `{password}GTEL#`
    #[must_use]
    pub fn stop_promo(&self) -> String {
        Command::StopPromo.encode(&self.password)
    }

    /// `{password}WHL{phone}#`
    #[must_use]
    pub fn whitelist_add(&self, phone: &PhoneNumber) -> String {
        Command::WhitelistAdd {
            phone: phone.clone(),
        }
        .encode(&self.password)
    }

    /// `{password}RHL{phone}#`
    #[must_use]
    pub fn whitelist_remove(&self, phone: &PhoneNumber) -> String {
        Command::WhitelistRemove {
            phone: phone.clone(),
        }
        .encode(&self.password)
    }
}
