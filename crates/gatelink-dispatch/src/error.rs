//! Error types for SMS dispatch operations.

/// Result type alias for dispatch operations.
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

/// Errors that can occur while handing a command to an SMS channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No destination number is configured for the device.
    #[error("Device number not set, configure the unit number first")]
    MissingDestination,

    /// The SMS channel refused or failed to accept the message.
    #[error("Send failed: {message}")]
    SendFailed { message: String },
}

impl DispatchError {
    /// Create a new send failure with a channel-specific message.
    pub fn send_failed(message: impl Into<String>) -> Self {
        Self::SendFailed {
            message: message.into(),
        }
    }
}
