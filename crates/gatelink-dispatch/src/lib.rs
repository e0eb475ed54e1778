//! SMS dispatch layer for GateLink command delivery.
//!
//! Commands reach the relay board as ordinary text messages. This crate
//! owns the last hop: the [`SmsDispatch`] channel abstraction, a
//! recording [`MockDispatch`] for tests and dry-runs, and the
//! platform-specific `sms:` composer links that hand a pre-filled
//! message to a phone's messaging app.
//!
//! Nothing here composes or validates commands; bodies arrive fully
//! formed from `gatelink-protocol`.

pub mod composer;
pub mod error;
pub mod mock;
pub mod traits;

pub use composer::{Platform, composer_uri, composer_uri_for};
pub use error::{DispatchError, DispatchResult};
pub use mock::{MockDispatch, SentMessage};
pub use traits::SmsDispatch;
