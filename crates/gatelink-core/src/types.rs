use crate::{
    Result,
    constants::{
        COUNTRY_CODE, DEFAULT_LATCH_SECONDS, DEFAULT_PASSWORD, IDD_PREFIX, INTERNATIONAL_PREFIX,
        LATCH_LENGTH, LATCH_MOMENTARY, LATCH_TOGGLE, MAX_LATCH_SECONDS, MAX_SERIAL, MIN_SERIAL,
        MOBILE_PREFIX, MODE_ALL_CALLERS, MODE_AUTHORIZED, PASSWORD_LENGTH, SERIAL_LENGTH,
        TIMESTAMP_LONG_LENGTH, TIMESTAMP_SHORT_LENGTH, TIMESTAMP_YEAR_MAX, TIMESTAMP_YEAR_MIN,
        TRUNK_MOBILE_PREFIX,
    },
    error::Error,
};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Device password (exactly 4 digits)
///
/// # Security
/// This type implements constant-time comparison to prevent timing attacks
/// when checking an entered password against the stored one.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Password(String);

impl Password {
    /// Create a new password with validation.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidPassword` if the trimmed input is not exactly
    /// 4 ASCII digits.
    pub fn new(raw: &str) -> Result<Self> {
        let raw = raw.trim();

        if raw.len() != PASSWORD_LENGTH {
            return Err(Error::InvalidPassword {
                reason: format!(
                    "must be exactly {PASSWORD_LENGTH} digits, got {} characters",
                    raw.len()
                ),
            });
        }

        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidPassword {
                reason: "must contain only digits".to_string(),
            });
        }

        Ok(Password(raw.to_string()))
    }

    /// Get the password digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Password {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Password::new(s)
    }
}

/// Constant-time comparison implementation for Password
///
/// This prevents timing attacks by ensuring comparison takes the same time
/// regardless of where the strings differ.
impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl std::hash::Hash for Password {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// User slot serial (1-200, rendered zero-padded to 3 digits)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Serial(u16);

impl Serial {
    /// Create a new serial with validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidSerial` if the value is outside 1-200.
    pub fn new(value: u16) -> Result<Self> {
        if !(MIN_SERIAL..=MAX_SERIAL).contains(&value) {
            return Err(Error::InvalidSerial {
                value: value.to_string(),
            });
        }
        Ok(Serial(value))
    }

    /// Parse a serial from user input.
    ///
    /// # Errors
    /// Returns `Error::InvalidSerial` if the input is not numeric or is
    /// outside 1-200.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatelink_core::Serial;
    ///
    /// let serial = Serial::parse("7").unwrap();
    /// assert_eq!(serial.to_string_padded(), "007");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let value: u16 = s.trim().parse().map_err(|_| Error::InvalidSerial {
            value: s.to_string(),
        })?;
        Serial::new(value)
    }

    /// Get the raw slot number as u16.
    #[must_use]
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Format the serial as a zero-padded 3-digit string.
    #[must_use]
    pub fn to_string_padded(&self) -> String {
        format!("{:0width$}", self.0, width = SERIAL_LENGTH)
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = SERIAL_LENGTH)
    }
}

impl std::str::FromStr for Serial {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Serial::parse(s)
    }
}

/// Inclusive span of user slots for range queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialRange {
    start: Serial,
    end: Serial,
}

impl SerialRange {
    /// Create a new range with validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidSerialRange` if `start` is after `end`.
    pub fn new(start: Serial, end: Serial) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidSerialRange {
                start: start.as_u16(),
                end: end.as_u16(),
            });
        }
        Ok(SerialRange { start, end })
    }

    /// Get the first slot of the range.
    #[must_use]
    pub fn start(&self) -> Serial {
        self.start
    }

    /// Get the last slot of the range.
    #[must_use]
    pub fn end(&self) -> Serial {
        self.end
    }

    /// Returns `true` if the given slot falls inside the range.
    #[inline]
    #[must_use]
    pub fn contains(&self, serial: Serial) -> bool {
        self.start <= serial && serial <= self.end
    }
}

/// Caller phone number in the device's international format
///
/// The firmware matches caller IDs against stored numbers literally, so
/// every number must carry the `0061` prefix in exactly the same shape.
/// Raw user input is untrusted until passed through [`PhoneNumber::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize arbitrary user input into international format.
    ///
    /// Non-digit characters are stripped first, then the trunk/country
    /// prefix is rewritten:
    ///
    /// - `04xxxxxxxx` - trunk zero dropped, `0061` prepended
    /// - `61xxxxxxxxx` - `00` prepended
    /// - `4xxxxxxxx` - `0061` prepended
    /// - anything else without an IDD prefix - `0061` prepended
    /// - already `0061...` or another `00...` number - left unchanged
    ///
    /// Normalization is best-effort and never fails; degenerate input
    /// (for example, no digits at all) yields a too-short result that
    /// [`PhoneNumber::new`] and the command validator reject.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatelink_core::PhoneNumber;
    ///
    /// assert_eq!(PhoneNumber::normalize("0412 345 678").as_str(), "0061412345678");
    /// assert_eq!(PhoneNumber::normalize("61412345678").as_str(), "0061412345678");
    /// assert_eq!(PhoneNumber::normalize("0061412345678").as_str(), "0061412345678");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        let normalized = if digits.starts_with(TRUNK_MOBILE_PREFIX) {
            // Drop the trunk zero, keep the mobile prefix
            format!("{INTERNATIONAL_PREFIX}{}", &digits[1..])
        } else if digits.starts_with(COUNTRY_CODE) {
            format!("{IDD_PREFIX}{digits}")
        } else if !digits.starts_with(INTERNATIONAL_PREFIX) {
            if digits.starts_with(MOBILE_PREFIX) {
                format!("{INTERNATIONAL_PREFIX}{digits}")
            } else if !digits.starts_with(IDD_PREFIX) {
                // Bare local number without any country code
                format!("{INTERNATIONAL_PREFIX}{digits}")
            } else {
                digits
            }
        } else {
            digits
        };

        PhoneNumber(normalized)
    }

    /// Normalize and validate a phone number.
    ///
    /// # Errors
    /// Returns `Error::InvalidPhone` if the input carries no digits or
    /// normalizes to nothing beyond the international prefix.
    pub fn new(raw: &str) -> Result<Self> {
        if !raw.chars().any(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidPhone {
                reason: "no digits in input".to_string(),
            });
        }

        let phone = PhoneNumber::normalize(raw);
        if phone.0.len() <= INTERNATIONAL_PREFIX.len() {
            return Err(Error::InvalidPhone {
                reason: format!("'{raw}' is too short"),
            });
        }

        Ok(phone)
    }

    /// Get the normalized number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PhoneNumber::new(s)
    }
}

/// Timestamp wire encoding selector
///
/// The firmware understands two widths for access-window bounds. Callers
/// always state the style explicitly; nothing in this crate guesses a
/// style from input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampStyle {
    /// 12 digits, 4-digit year: `YYYYMMDDHHMM`
    Long,
    /// 10 digits, 2-digit year: `YYMMDDHHMM`
    Short,
}

impl TimestampStyle {
    /// Digit count of this encoding.
    #[inline]
    #[must_use]
    pub fn digit_len(self) -> usize {
        match self {
            TimestampStyle::Long => TIMESTAMP_LONG_LENGTH,
            TimestampStyle::Short => TIMESTAMP_SHORT_LENGTH,
        }
    }
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimestampStyle::Long => write!(f, "long"),
            TimestampStyle::Short => write!(f, "short"),
        }
    }
}

/// Minute-resolution timestamp for access-window bounds
///
/// Components are range-checked only (month 1-12, day 1-31); impossible
/// calendar dates such as February 31st pass construction and are left for
/// the device firmware to reject, matching its own behavior. Years are
/// pinned to 2000-2099 so the short encoding cannot alias.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DeviceTimestamp {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl DeviceTimestamp {
    /// Create a timestamp from components with range validation.
    ///
    /// # Errors
    /// Returns `Error::MalformedTimestamp` if any component is out of range.
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> Result<Self> {
        let reason = if !(TIMESTAMP_YEAR_MIN..=TIMESTAMP_YEAR_MAX).contains(&year) {
            Some(format!(
                "year must be {TIMESTAMP_YEAR_MIN}-{TIMESTAMP_YEAR_MAX}"
            ))
        } else if !(1..=12).contains(&month) {
            Some("month must be 1-12".to_string())
        } else if !(1..=31).contains(&day) {
            Some("day must be 1-31".to_string())
        } else if hour > 23 {
            Some("hour must be 0-23".to_string())
        } else if minute > 59 {
            Some("minute must be 0-59".to_string())
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(Error::MalformedTimestamp {
                value: format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"),
                reason,
            });
        }

        Ok(DeviceTimestamp {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Parse a timestamp from its wire encoding.
    ///
    /// # Errors
    /// Returns `Error::MalformedTimestamp` if the input length does not
    /// match the style's digit count, contains non-digits, or carries an
    /// out-of-range component. The error keeps the original string so
    /// display layers can show the raw input unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatelink_core::{DeviceTimestamp, TimestampStyle};
    ///
    /// let ts = DeviceTimestamp::parse("202409051000", TimestampStyle::Long).unwrap();
    /// assert_eq!(ts.format(TimestampStyle::Short), "2409051000");
    /// ```
    pub fn parse(s: &str, style: TimestampStyle) -> Result<Self> {
        let expected = style.digit_len();
        if s.len() != expected {
            return Err(Error::MalformedTimestamp {
                value: s.to_string(),
                reason: format!("expected {expected} digits for {style} style, got {}", s.len()),
            });
        }

        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::MalformedTimestamp {
                value: s.to_string(),
                reason: "timestamp must be numeric".to_string(),
            });
        }

        let component = |range: std::ops::Range<usize>| -> Result<u16> {
            s[range.clone()]
                .parse()
                .map_err(|_| Error::MalformedTimestamp {
                    value: s.to_string(),
                    reason: format!("unreadable component at {}..{}", range.start, range.end),
                })
        };

        let (year, rest) = match style {
            TimestampStyle::Long => (component(0..4)?, 4),
            TimestampStyle::Short => (TIMESTAMP_YEAR_MIN + component(0..2)?, 2),
        };

        DeviceTimestamp::new(
            year,
            component(rest..rest + 2)? as u8,
            component(rest + 2..rest + 4)? as u8,
            component(rest + 4..rest + 6)? as u8,
            component(rest + 6..rest + 8)? as u8,
        )
    }

    /// Encode the timestamp in the requested wire style.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatelink_core::{DeviceTimestamp, TimestampStyle};
    ///
    /// let ts = DeviceTimestamp::new(2024, 9, 5, 10, 0).unwrap();
    /// assert_eq!(ts.format(TimestampStyle::Long), "202409051000");
    /// assert_eq!(ts.format(TimestampStyle::Short), "2409051000");
    /// ```
    #[must_use]
    pub fn format(&self, style: TimestampStyle) -> String {
        match style {
            TimestampStyle::Long => format!(
                "{:04}{:02}{:02}{:02}{:02}",
                self.year, self.month, self.day, self.hour, self.minute
            ),
            TimestampStyle::Short => format!(
                "{:02}{:02}{:02}{:02}{:02}",
                self.year % 100,
                self.month,
                self.day,
                self.hour,
                self.minute
            ),
        }
    }

    /// Create a timestamp from a chrono datetime.
    ///
    /// # Errors
    /// Returns `Error::MalformedTimestamp` if the year falls outside the
    /// representable 2000-2099 window.
    pub fn from_datetime(dt: &NaiveDateTime) -> Result<Self> {
        DeviceTimestamp::new(
            u16::try_from(dt.year()).unwrap_or(0),
            dt.month() as u8,
            dt.day() as u8,
            dt.hour() as u8,
            dt.minute() as u8,
        )
    }

    /// Convert to a chrono datetime for display and arithmetic.
    ///
    /// Returns `None` for range-valid but calendar-impossible dates
    /// (for example, February 31st).
    #[must_use]
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
            .and_then(|d| d.and_hms_opt(u32::from(self.hour), u32::from(self.minute), 0))
    }

    /// Get the year component.
    #[must_use]
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Get the month component.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Get the day component.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Get the hour component.
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Get the minute component.
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for DeviceTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Access window granted to an authorized caller
///
/// Bound ordering is not enforced here; the firmware treats an inverted
/// window as never matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DeviceTimestamp,
    pub end: DeviceTimestamp,
}

impl TimeWindow {
    /// Create a window from its bounds.
    #[must_use]
    pub fn new(start: DeviceTimestamp, end: DeviceTimestamp) -> Self {
        TimeWindow { start, end }
    }

    /// Returns `true` if the given instant falls inside the window.
    #[inline]
    #[must_use]
    pub fn contains(&self, at: &DeviceTimestamp) -> bool {
        self.start <= *at && *at <= self.end
    }
}

/// Relay access-control mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    /// Only stored callers trigger the relay (`AUT`)
    #[serde(rename = "AUT")]
    Authorized,
    /// Any caller triggers the relay (`ALL`)
    #[serde(rename = "ALL")]
    AllCallers,
}

impl AccessMode {
    /// Parse a mode from its device token.
    ///
    /// # Errors
    /// Returns `Error::InvalidAccessMode` if the input is neither `AUT`
    /// nor `ALL` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            MODE_AUTHORIZED => Ok(AccessMode::Authorized),
            MODE_ALL_CALLERS => Ok(AccessMode::AllCallers),
            _ => Err(Error::InvalidAccessMode {
                value: s.to_string(),
            }),
        }
    }

    /// Get the device token for this mode.
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AccessMode::Authorized => MODE_AUTHORIZED,
            AccessMode::AllCallers => MODE_ALL_CALLERS,
        }
    }

    /// Returns `true` if only stored callers may trigger the relay.
    #[inline]
    #[must_use]
    pub fn is_authorized(self) -> bool {
        matches!(self, AccessMode::Authorized)
    }

    /// Returns `true` if any caller may trigger the relay.
    #[inline]
    #[must_use]
    pub fn is_all_callers(self) -> bool {
        matches!(self, AccessMode::AllCallers)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AccessMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AccessMode::parse(s)
    }
}

/// Relay latch time in seconds (rendered zero-padded to 3 digits)
///
/// Firmware semantics, documented but never interpreted by the codec:
/// `000` is a momentary pulse, `001`-`998` hold the relay for that many
/// seconds, `999` toggles and latches until the next trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatchTime(u16);

impl LatchTime {
    /// Create a latch time with validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidLatchTime` if the value exceeds 999.
    pub fn new(seconds: u16) -> Result<Self> {
        if seconds > MAX_LATCH_SECONDS {
            return Err(Error::InvalidLatchTime {
                value: seconds.to_string(),
            });
        }
        Ok(LatchTime(seconds))
    }

    /// Parse a latch time from its exact wire form (3 digits).
    ///
    /// # Errors
    /// Returns `Error::InvalidLatchTime` if the input is not exactly
    /// 3 ASCII digits.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != LATCH_LENGTH || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidLatchTime {
                value: s.to_string(),
            });
        }
        let seconds: u16 = s.parse().map_err(|_| Error::InvalidLatchTime {
            value: s.to_string(),
        })?;
        LatchTime::new(seconds)
    }

    /// Shape free-form user input into a latch time.
    ///
    /// Keeps digits only, truncates to the first 3, and zero-pads, so
    /// `"3"` becomes `003` and `"12345s"` becomes `123`.
    ///
    /// # Errors
    /// Returns `Error::InvalidLatchTime` if the input carries no digits.
    pub fn from_user_input(raw: &str) -> Result<Self> {
        let digits: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(LATCH_LENGTH)
            .collect();

        if digits.is_empty() {
            return Err(Error::InvalidLatchTime {
                value: raw.to_string(),
            });
        }

        let seconds: u16 = digits.parse().map_err(|_| Error::InvalidLatchTime {
            value: raw.to_string(),
        })?;
        LatchTime::new(seconds)
    }

    /// Get the raw seconds value.
    #[must_use]
    pub fn as_secs(&self) -> u16 {
        self.0
    }

    /// Format as the zero-padded 3-digit wire field.
    #[must_use]
    pub fn to_string_padded(&self) -> String {
        format!("{:0width$}", self.0, width = LATCH_LENGTH)
    }

    /// Returns `true` for the momentary-pulse value (`000`).
    #[inline]
    #[must_use]
    pub fn is_momentary(self) -> bool {
        self.0 == LATCH_MOMENTARY
    }

    /// Returns `true` for the toggle/latch-until-next-call value (`999`).
    #[inline]
    #[must_use]
    pub fn is_toggle(self) -> bool {
        self.0 == LATCH_TOGGLE
    }

    /// Returns `true` for a timed hold (`001`-`998`).
    #[inline]
    #[must_use]
    pub fn is_timed_hold(self) -> bool {
        !self.is_momentary() && !self.is_toggle()
    }
}

impl fmt::Display for LatchTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = LATCH_LENGTH)
    }
}

impl Default for LatchTime {
    fn default() -> Self {
        LatchTime(DEFAULT_LATCH_SECONDS)
    }
}

/// Per-event notification recipients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationFlags {
    /// Notify the registered admin number
    pub admin: bool,
    /// Notify the caller who triggered the relay
    pub caller: bool,
}

impl NotificationFlags {
    /// Encode the flags as the two-character wire field (`admin` first).
    #[must_use]
    pub fn encode_bits(&self) -> String {
        let bit = |b: bool| if b { '1' } else { '0' };
        format!("{}{}", bit(self.admin), bit(self.caller))
    }

    /// Returns `true` if at least one recipient is enabled.
    #[inline]
    #[must_use]
    pub fn any(&self) -> bool {
        self.admin || self.caller
    }
}

/// SMS notification preferences for both relay events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub relay_on: NotificationFlags,
    pub relay_off: NotificationFlags,
}

/// Authorized caller stored in one of the device's 200 slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedUser {
    pub serial: Serial,
    pub phone: PhoneNumber,
    pub name: Option<String>,
    pub window: Option<TimeWindow>,
}

impl AuthorizedUser {
    /// Returns `true` if the user carries an access window.
    #[must_use]
    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Returns `true` if the user may trigger the relay at the given time.
    ///
    /// Users without a window are always admitted.
    #[must_use]
    pub fn admits_at(&self, at: &DeviceTimestamp) -> bool {
        match &self.window {
            Some(window) => window.contains(at),
            None => true,
        }
    }
}

/// Relay behavior settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySettings {
    pub mode: AccessMode,
    pub latch_time: LatchTime,
}

impl Default for RelaySettings {
    fn default() -> Self {
        RelaySettings {
            mode: AccessMode::Authorized,
            latch_time: LatchTime::default(),
        }
    }
}

/// Full device configuration snapshot
///
/// The persistence layer owns the canonical copy; codec functions receive
/// an explicit snapshot per call and never reach for ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Shared device password, prefixed to every command
    pub password: Password,
    /// The device's own phone number (SMS destination, never part of a
    /// command body)
    pub unit_number: Option<String>,
    /// Admin number last programmed into the device, stored normalized
    pub admin_number: Option<PhoneNumber>,
    pub relay: RelaySettings,
    pub notifications: NotificationSettings,
    pub users: Vec<AuthorizedUser>,
}

impl DeviceConfig {
    /// Find a user by slot serial.
    #[must_use]
    pub fn find_user(&self, serial: Serial) -> Option<&AuthorizedUser> {
        self.users.iter().find(|u| u.serial == serial)
    }

    /// Insert a user, replacing any existing entry in the same slot.
    ///
    /// The list stays sorted by serial.
    pub fn upsert_user(&mut self, user: AuthorizedUser) {
        self.users.retain(|u| u.serial != user.serial);
        self.users.push(user);
        self.users.sort_by_key(|u| u.serial);
    }

    /// Remove and return the user in the given slot, if any.
    pub fn remove_user(&mut self, serial: Serial) -> Option<AuthorizedUser> {
        let index = self.users.iter().position(|u| u.serial == serial)?;
        Some(self.users.remove(index))
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            password: Password(DEFAULT_PASSWORD.to_string()),
            unit_number: None,
            admin_number: None,
            relay: RelaySettings::default(),
            notifications: NotificationSettings::default(),
            users: Vec::new(),
        }
    }
}
