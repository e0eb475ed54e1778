//! Mock dispatch implementation for testing and dry-runs.
//!
//! This module provides a simulated SMS channel that records every message
//! instead of sending it, so tests and dry-run tooling can inspect exactly
//! what would have reached the device.

use crate::error::{DispatchError, DispatchResult};
use crate::traits::SmsDispatch;
use tracing::debug;

/// A message recorded by the mock channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Destination phone number as given to `send`.
    pub destination: String,

    /// Composed command body.
    pub body: String,
}

/// Mock SMS channel that records messages in an outbox.
///
/// The next send can be scripted to fail, which is how tests exercise
/// error paths without a real carrier.
///
/// # Examples
///
/// ```
/// use gatelink_dispatch::{MockDispatch, SmsDispatch};
///
/// let mut channel = MockDispatch::new();
/// channel.send("0412000000", "1234CC").unwrap();
/// channel.send("0412000000", "1234GOT030#").unwrap();
///
/// assert_eq!(channel.outbox().len(), 2);
/// assert_eq!(channel.last().unwrap().body, "1234GOT030#");
/// ```
#[derive(Debug, Default)]
pub struct MockDispatch {
    outbox: Vec<SentMessage>,
    fail_next: Option<String>,
}

impl MockDispatch {
    /// Create a new mock channel with an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next `send` call to fail with the given message.
    ///
    /// The failure is consumed by that call; subsequent sends succeed.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }

    /// All messages recorded so far, oldest first.
    #[must_use]
    pub fn outbox(&self) -> &[SentMessage] {
        &self.outbox
    }

    /// The most recently recorded message, if any.
    #[must_use]
    pub fn last(&self) -> Option<&SentMessage> {
        self.outbox.last()
    }

    /// Drain the outbox, returning the recorded messages.
    pub fn take_outbox(&mut self) -> Vec<SentMessage> {
        std::mem::take(&mut self.outbox)
    }
}

impl SmsDispatch for MockDispatch {
    fn send(&mut self, destination: &str, body: &str) -> DispatchResult<()> {
        if destination.trim().is_empty() {
            return Err(DispatchError::MissingDestination);
        }
        if let Some(message) = self.fail_next.take() {
            return Err(DispatchError::send_failed(message));
        }

        debug!("Recording message to {} ({} bytes)", destination, body.len());
        self.outbox.push(SentMessage {
            destination: destination.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_records_in_order() {
        let mut channel = MockDispatch::new();

        channel.send("0412000000", "1234CC").unwrap();
        channel.send("0412000000", "1234DD").unwrap();

        let bodies: Vec<_> = channel.outbox().iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, ["1234CC", "1234DD"]);
        assert_eq!(channel.last().unwrap().destination, "0412000000");
    }

    #[test]
    fn test_empty_destination_rejected() {
        let mut channel = MockDispatch::new();

        let err = channel.send("", "1234CC").unwrap_err();
        assert_eq!(err, DispatchError::MissingDestination);

        let err = channel.send("   ", "1234CC").unwrap_err();
        assert_eq!(err, DispatchError::MissingDestination);

        assert!(channel.outbox().is_empty());
    }

    #[test]
    fn test_scripted_failure_consumed_by_one_send() {
        let mut channel = MockDispatch::new();
        channel.fail_next("SIM not ready");

        let err = channel.send("0412000000", "1234CC").unwrap_err();
        assert_eq!(err, DispatchError::send_failed("SIM not ready"));
        assert!(channel.outbox().is_empty());

        channel.send("0412000000", "1234CC").unwrap();
        assert_eq!(channel.outbox().len(), 1);
    }

    #[test]
    fn test_take_outbox_drains() {
        let mut channel = MockDispatch::new();
        channel.send("0412000000", "1234EE").unwrap();

        let taken = channel.take_outbox();
        assert_eq!(taken.len(), 1);
        assert!(channel.outbox().is_empty());
    }
}
