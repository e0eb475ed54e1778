//! Dispatch trait definition.
//!
//! This module defines the contract between command composition and the
//! SMS channel that carries commands to the relay board. The channel is
//! always an external collaborator (a phone's messaging app, a GSM modem,
//! a test double), so the trait stays synchronous and string-shaped:
//! implementations receive a destination number and a fully composed
//! command body, nothing more.

use crate::error::DispatchResult;

/// An outbound SMS channel.
///
/// Implementations must reject an empty destination with
/// [`DispatchError::MissingDestination`] rather than handing a message to
/// the carrier with nowhere to go.
///
/// [`DispatchError::MissingDestination`]: crate::DispatchError::MissingDestination
///
/// # Examples
///
/// ```
/// use gatelink_dispatch::{MockDispatch, SmsDispatch};
///
/// # fn example() -> gatelink_dispatch::DispatchResult<()> {
/// let mut channel = MockDispatch::new();
/// channel.send("0412000000", "1234CC")?;
///
/// assert_eq!(channel.outbox().len(), 1);
/// # Ok(())
/// # }
/// ```
pub trait SmsDispatch {
    /// Hand one composed command to the channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination is empty or the channel
    /// cannot accept the message.
    fn send(&mut self, destination: &str, body: &str) -> DispatchResult<()>;
}
