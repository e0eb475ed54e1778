//! Platform composer links.
//!
//! Instead of sending through a modem, the usual path hands the command
//! to the phone's own messaging app through an `sms:` link with a
//! pre-filled body. The link shape is platform-specific, so the target
//! platform is an explicit argument.

use crate::error::{DispatchError, DispatchResult};
use gatelink_core::DeviceConfig;

/// Target platform for composer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// iOS Messages, `sms:{number}&body=`
    Ios,
    /// Android messaging apps, `sms:{number}?body=`
    Android,
}

impl Platform {
    /// Separator between the number and the `body` query.
    #[must_use]
    pub fn body_separator(self) -> char {
        match self {
            Platform::Ios => '&',
            Platform::Android => '?',
        }
    }
}

/// Render the platform-native SMS composer link.
///
/// The body is URL-encoded; `#` in particular must survive as `%23` or
/// the messaging app truncates the command. iOS additionally refuses
/// numbers carrying a `+` prefix in `sms:` links, so the prefix is
/// dropped there.
///
/// # Errors
///
/// Returns [`DispatchError::MissingDestination`] if the destination is
/// empty.
///
/// # Examples
///
/// ```
/// use gatelink_dispatch::{Platform, composer_uri};
///
/// let uri = composer_uri(Platform::Android, "0412000000", "1234A007#0061412345678#").unwrap();
/// assert_eq!(uri, "sms:0412000000?body=1234A007%230061412345678%23");
/// ```
pub fn composer_uri(platform: Platform, destination: &str, body: &str) -> DispatchResult<String> {
    let destination = destination.trim();
    if destination.is_empty() {
        return Err(DispatchError::MissingDestination);
    }

    let destination = match platform {
        Platform::Ios => destination.strip_prefix('+').unwrap_or(destination),
        Platform::Android => destination,
    };

    Ok(format!(
        "sms:{destination}{}body={}",
        platform.body_separator(),
        urlencoding::encode(body)
    ))
}

/// Render the composer link for a stored device profile.
///
/// # Errors
///
/// Returns [`DispatchError::MissingDestination`] if the profile has no
/// unit number yet.
pub fn composer_uri_for(
    platform: Platform,
    config: &DeviceConfig,
    body: &str,
) -> DispatchResult<String> {
    composer_uri(
        platform,
        config.unit_number.as_deref().unwrap_or_default(),
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Platform::Ios, "sms:0412000000&body=1234CC")]
    #[case(Platform::Android, "sms:0412000000?body=1234CC")]
    fn test_platform_link_shape(#[case] platform: Platform, #[case] expected: &str) {
        let uri = composer_uri(platform, "0412000000", "1234CC").unwrap();
        assert_eq!(uri, expected);
    }

    #[test]
    fn test_body_hash_is_encoded() {
        let uri = composer_uri(Platform::Android, "0412000000", "1234TEL0061412345678#").unwrap();
        assert_eq!(uri, "sms:0412000000?body=1234TEL0061412345678%23");
    }

    #[rstest]
    #[case(Platform::Ios, "+61412000000", "sms:61412000000&body=1234CC")]
    #[case(Platform::Android, "+61412000000", "sms:+61412000000?body=1234CC")]
    fn test_plus_prefix_only_stripped_on_ios(
        #[case] platform: Platform,
        #[case] destination: &str,
        #[case] expected: &str,
    ) {
        let uri = composer_uri(platform, destination, "1234CC").unwrap();
        assert_eq!(uri, expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_empty_destination_rejected(#[case] destination: &str) {
        let err = composer_uri(Platform::Android, destination, "1234CC").unwrap_err();
        assert_eq!(err, DispatchError::MissingDestination);
    }

    #[test]
    fn test_profile_without_unit_number_rejected() {
        let config = DeviceConfig::default();

        let err = composer_uri_for(Platform::Android, &config, "1234CC").unwrap_err();
        assert_eq!(err, DispatchError::MissingDestination);
    }

    #[test]
    fn test_profile_with_unit_number() {
        let config = DeviceConfig {
            unit_number: Some("0412000000".to_string()),
            ..DeviceConfig::default()
        };

        let uri = composer_uri_for(Platform::Ios, &config, "1234EE").unwrap();
        assert_eq!(uri, "sms:0412000000&body=1234EE");
    }
}
