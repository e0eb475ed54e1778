//! Raw command forms and the snapshot they are checked against.
//!
//! A [`CommandRequest`] holds exactly what the user typed. Nothing here
//! reaches into stored state; the caller passes a [`ConfigSnapshot`] in,
//! which keeps every function testable without a store. The request can
//! be checked leniently ([`CommandRequest::validate`]), rendered as a
//! live preview while still incomplete ([`CommandRequest::preview`]), or
//! resolved into a typed [`Command`] once the user commits
//! ([`CommandRequest::resolve`]).

use gatelink_core::constants::{
    KEYWORD_ADMIN_NUMBER, KEYWORD_LATCH, KEYWORD_NOTIFY_OFF, KEYWORD_NOTIFY_ON, KEYWORD_PASSWORD,
    KEYWORD_RELAY_OFF, KEYWORD_RELAY_ON, KEYWORD_STATUS, KEYWORD_STOP_PROMO, KEYWORD_USER,
    KEYWORD_USER_RANGE, KEYWORD_WHITELIST_ADD, KEYWORD_WHITELIST_REMOVE, NOTIFY_OFF_TEXT,
    NOTIFY_ON_TEXT, SEPARATOR,
};
use gatelink_core::{
    AccessMode, DeviceConfig, DeviceTimestamp, Error, LatchTime, NotificationFlags, Password,
    PhoneNumber, Result, Serial, SerialRange, TimeWindow, TimestampStyle,
};

use crate::command::Command;
use crate::commands::CommandKind;
use crate::validation::{
    ValidationError, validate_password, validate_phone, validate_serial, validate_serial_range,
    validate_unit_number, validate_window,
};

/// Raw view of the configuration a command is checked against.
///
/// Borrowed so callers holding plain form state (a password field that
/// may still be empty) can build one without a [`DeviceConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigSnapshot<'a> {
    /// Device password as raw text, possibly empty.
    pub password: &'a str,
    /// Phone number of the device itself, if configured.
    pub unit_number: Option<&'a str>,
}

impl<'a> ConfigSnapshot<'a> {
    /// Snapshot a stored configuration.
    #[must_use]
    pub fn of(config: &'a DeviceConfig) -> Self {
        Self {
            password: config.password.as_str(),
            unit_number: config.unit_number.as_deref(),
        }
    }
}

/// One command intent plus the raw field values behind it.
///
/// Field setters take anything string-like and store it untouched, so a
/// request can hold a half-typed serial or a phone number with spaces.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    kind: CommandKind,
    serial: Option<String>,
    serial_end: Option<String>,
    phone: Option<String>,
    window_start: Option<String>,
    window_end: Option<String>,
    style: TimestampStyle,
    new_password: Option<String>,
    mode: Option<AccessMode>,
    latch: Option<String>,
    flags: NotificationFlags,
}

impl CommandRequest {
    /// Start an empty request for the given intent.
    #[must_use]
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            serial: None,
            serial_end: None,
            phone: None,
            window_start: None,
            window_end: None,
            style: TimestampStyle::Long,
            new_password: None,
            mode: None,
            latch: None,
            flags: NotificationFlags::default(),
        }
    }

    /// The intent this request carries.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Raw slot serial, or range start for range queries.
    #[must_use]
    pub fn serial(mut self, raw: impl Into<String>) -> Self {
        self.serial = Some(raw.into());
        self
    }

    /// Raw range end for range queries.
    #[must_use]
    pub fn serial_end(mut self, raw: impl Into<String>) -> Self {
        self.serial_end = Some(raw.into());
        self
    }

    /// Raw phone number.
    #[must_use]
    pub fn phone(mut self, raw: impl Into<String>) -> Self {
        self.phone = Some(raw.into());
        self
    }

    /// Raw access window start.
    #[must_use]
    pub fn window_start(mut self, raw: impl Into<String>) -> Self {
        self.window_start = Some(raw.into());
        self
    }

    /// Raw access window end.
    #[must_use]
    pub fn window_end(mut self, raw: impl Into<String>) -> Self {
        self.window_end = Some(raw.into());
        self
    }

    /// Timestamp style for the window bounds (long by default).
    #[must_use]
    pub fn style(mut self, style: TimestampStyle) -> Self {
        self.style = style;
        self
    }

    /// Raw replacement password.
    #[must_use]
    pub fn new_password(mut self, raw: impl Into<String>) -> Self {
        self.new_password = Some(raw.into());
        self
    }

    /// Access mode to switch to.
    #[must_use]
    pub fn mode(mut self, mode: AccessMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Raw latch time in seconds.
    #[must_use]
    pub fn latch(mut self, raw: impl Into<String>) -> Self {
        self.latch = Some(raw.into());
        self
    }

    /// Notification recipients.
    #[must_use]
    pub fn flags(mut self, flags: NotificationFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Advisory check of the snapshot and the fields this intent uses.
    ///
    /// Snapshot problems win over field problems so setup mistakes
    /// surface before typing mistakes. Returns the first failing tag.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] tag for the first field that
    /// fails.
    pub fn validate(&self, snapshot: &ConfigSnapshot<'_>) -> std::result::Result<(), ValidationError> {
        validate_unit_number(snapshot.unit_number)?;
        validate_password(snapshot.password)?;

        match self.kind {
            CommandKind::RelayOn
            | CommandKind::RelayOff
            | CommandKind::QueryStatus
            | CommandKind::StopPromo
            | CommandKind::SetAccessMode
            | CommandKind::SetLatchTime
            | CommandKind::NotifyRelayOn
            | CommandKind::NotifyRelayOff => Ok(()),
            CommandKind::ChangePassword => validate_password(self.raw(&self.new_password)),
            CommandKind::SetAdminNumber
            | CommandKind::WhitelistAdd
            | CommandKind::WhitelistRemove => validate_phone(self.raw(&self.phone)),
            CommandKind::AddUser => {
                validate_serial(self.raw(&self.serial))?;
                validate_phone(self.raw(&self.phone))?;
                validate_window(self.window_start.as_deref(), self.window_end.as_deref())
            }
            CommandKind::DeleteUser | CommandKind::QueryUser => {
                validate_serial(self.raw(&self.serial))
            }
            CommandKind::QueryUserRange => {
                validate_serial_range(self.raw(&self.serial), self.raw(&self.serial_end))
            }
        }
    }

    /// Resolve the raw fields into a typed [`Command`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when a required field was never
    /// set, or the parse error of the first field that fails strict
    /// parsing.
    pub fn resolve(&self) -> Result<Command> {
        match self.kind {
            CommandKind::RelayOn => Ok(Command::RelayOn),
            CommandKind::RelayOff => Ok(Command::RelayOff),
            CommandKind::QueryStatus => Ok(Command::QueryStatus),
            CommandKind::StopPromo => Ok(Command::StopPromo),
            CommandKind::ChangePassword => {
                let raw = self.required(&self.new_password, "new-password")?;
                Ok(Command::ChangePassword {
                    new_password: Password::new(raw)?,
                })
            }
            CommandKind::SetAdminNumber => {
                let raw = self.required(&self.phone, "phone")?;
                Ok(Command::SetAdminNumber {
                    phone: PhoneNumber::new(raw)?,
                })
            }
            CommandKind::SetAccessMode => {
                let mode = self.mode.ok_or(Error::MissingField { field: "mode" })?;
                Ok(Command::SetAccessMode { mode })
            }
            CommandKind::SetLatchTime => {
                let raw = self.required(&self.latch, "latch")?;
                Ok(Command::SetLatchTime {
                    latch: LatchTime::from_user_input(raw)?,
                })
            }
            CommandKind::AddUser => {
                let serial = Serial::parse(self.required(&self.serial, "serial")?)?;
                let phone = PhoneNumber::new(self.required(&self.phone, "phone")?)?;
                let window = self.resolve_window()?;
                Ok(Command::AddUser {
                    serial,
                    phone,
                    window,
                    style: self.style,
                })
            }
            CommandKind::DeleteUser => {
                let serial = Serial::parse(self.required(&self.serial, "serial")?)?;
                Ok(Command::DeleteUser { serial })
            }
            CommandKind::QueryUser => {
                let serial = Serial::parse(self.required(&self.serial, "serial")?)?;
                Ok(Command::QueryUser { serial })
            }
            CommandKind::QueryUserRange => {
                let start = Serial::parse(self.required(&self.serial, "serial")?)?;
                let end = Serial::parse(self.required(&self.serial_end, "serial-end")?)?;
                Ok(Command::QueryUserRange {
                    range: SerialRange::new(start, end)?,
                })
            }
            CommandKind::NotifyRelayOn => Ok(Command::NotifyRelayOn { flags: self.flags }),
            CommandKind::NotifyRelayOff => Ok(Command::NotifyRelayOff { flags: self.flags }),
            CommandKind::WhitelistAdd => {
                let raw = self.required(&self.phone, "phone")?;
                Ok(Command::WhitelistAdd {
                    phone: PhoneNumber::new(raw)?,
                })
            }
            CommandKind::WhitelistRemove => {
                let raw = self.required(&self.phone, "phone")?;
                Ok(Command::WhitelistRemove {
                    phone: PhoneNumber::new(raw)?,
                })
            }
        }
    }

    /// Best-effort rendering of the command text as typed so far.
    ///
    /// Fields that parse are shown in canonical form (padded serials,
    /// normalized phone numbers); fields that do not are shown as typed.
    /// For a request that passes [`Self::resolve`], the preview is
    /// exactly the string [`Command::encode`] produces.
    #[must_use]
    pub fn preview(&self, snapshot: &ConfigSnapshot<'_>) -> String {
        let password = snapshot.password.trim();
        match self.kind {
            CommandKind::RelayOn => format!("{password}{KEYWORD_RELAY_ON}"),
            CommandKind::RelayOff => format!("{password}{KEYWORD_RELAY_OFF}"),
            CommandKind::QueryStatus => format!("{password}{KEYWORD_STATUS}"),
            CommandKind::StopPromo => format!("{password}{KEYWORD_STOP_PROMO}{SEPARATOR}"),
            CommandKind::ChangePassword => {
                let new = self.raw(&self.new_password).trim();
                format!("{password}{KEYWORD_PASSWORD}{new}")
            }
            CommandKind::SetAdminNumber => {
                let phone = self.preview_phone();
                format!("{password}{KEYWORD_ADMIN_NUMBER}{phone}{SEPARATOR}")
            }
            CommandKind::SetAccessMode => {
                let mode = self.mode.map_or("", AccessMode::as_str);
                format!("{password}{mode}{SEPARATOR}")
            }
            CommandKind::SetLatchTime => {
                let latch = self.preview_latch();
                format!("{password}{KEYWORD_LATCH}{latch}{SEPARATOR}")
            }
            CommandKind::AddUser => {
                let serial = self.preview_serial(&self.serial);
                let phone = self.preview_phone();
                let window = self.preview_window();
                format!("{password}{KEYWORD_USER}{serial}{SEPARATOR}{phone}{SEPARATOR}{window}")
            }
            CommandKind::DeleteUser => {
                let serial = self.preview_serial(&self.serial);
                format!("{password}{KEYWORD_USER}{serial}{SEPARATOR}{SEPARATOR}")
            }
            CommandKind::QueryUser => {
                let serial = self.preview_serial(&self.serial);
                format!("{password}{KEYWORD_USER}{serial}{SEPARATOR}")
            }
            CommandKind::QueryUserRange => {
                let start = self.preview_serial(&self.serial);
                let end = self.preview_serial(&self.serial_end);
                format!("{password}{KEYWORD_USER_RANGE}{start}{SEPARATOR}{end}{SEPARATOR}")
            }
            CommandKind::NotifyRelayOn => {
                preview_notify(password, KEYWORD_NOTIFY_ON, self.flags, NOTIFY_ON_TEXT)
            }
            CommandKind::NotifyRelayOff => {
                preview_notify(password, KEYWORD_NOTIFY_OFF, self.flags, NOTIFY_OFF_TEXT)
            }
            CommandKind::WhitelistAdd => {
                let phone = self.preview_phone();
                format!("{password}{KEYWORD_WHITELIST_ADD}{phone}{SEPARATOR}")
            }
            CommandKind::WhitelistRemove => {
                let phone = self.preview_phone();
                format!("{password}{KEYWORD_WHITELIST_REMOVE}{phone}{SEPARATOR}")
            }
        }
    }

    fn raw<'a>(&self, field: &'a Option<String>) -> &'a str {
        field.as_deref().unwrap_or("")
    }

    fn required<'a>(
        &self,
        field: &'a Option<String>,
        name: &'static str,
    ) -> Result<&'a str> {
        field
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingField { field: name })
    }

    fn resolve_window(&self) -> Result<Option<TimeWindow>> {
        let start = self.window_start.as_deref().filter(|s| !s.trim().is_empty());
        let end = self.window_end.as_deref().filter(|s| !s.trim().is_empty());
        match (start, end) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => Ok(Some(TimeWindow::new(
                DeviceTimestamp::parse(start.trim(), self.style)?,
                DeviceTimestamp::parse(end.trim(), self.style)?,
            ))),
            _ => Err(Error::IncompleteTimeWindow),
        }
    }

    fn preview_serial(&self, field: &Option<String>) -> String {
        let raw = field.as_deref().unwrap_or("");
        match Serial::parse(raw) {
            Ok(serial) => serial.to_string_padded(),
            Err(_) => raw.trim().to_string(),
        }
    }

    fn preview_phone(&self) -> String {
        let raw = self.raw(&self.phone);
        match PhoneNumber::new(raw) {
            Ok(phone) => phone.as_str().to_string(),
            Err(_) => raw.trim().to_string(),
        }
    }

    fn preview_latch(&self) -> String {
        let raw = self.raw(&self.latch);
        match LatchTime::from_user_input(raw) {
            Ok(latch) => latch.to_string_padded(),
            Err(_) => raw.trim().to_string(),
        }
    }

    fn preview_window(&self) -> String {
        let start = self.window_start.as_deref().map(str::trim).unwrap_or("");
        let end = self.window_end.as_deref().map(str::trim).unwrap_or("");
        if start.is_empty() && end.is_empty() {
            return String::new();
        }
        format!("{start}{SEPARATOR}{end}{SEPARATOR}")
    }
}

fn preview_notify(
    password: &str,
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
