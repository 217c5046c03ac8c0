//! Message types exchanged with the host runtime.
//!
//! Events flow host -> companion, commands companion -> host. The JSON
//! tags for the lifecycle events are the host runtime's own event names
//! (`ready`, `showConfiguration`, `webviewclosed`) so a bridge can relay
//! them without renaming.

use crate::payload::ConfigPayload;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier correlating a sent app message with its outcome.
///
/// Assigned by the companion, monotonically increasing per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub u32);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Event delivered by the host runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum HostEvent {
    /// The host runtime finished starting the companion
    Ready,
    /// The user asked for the configuration page
    ShowConfiguration,
    /// The configuration webview closed with a result
    #[serde(rename = "webviewclosed")]
    WebviewClosed { response: String },
    /// The host accepted a previously sent app message
    AppMessageAck { transaction: TransactionId },
    /// The host rejected a previously sent app message
    ///
    /// Ack and nack are mutually exclusive; exactly one arrives per send.
    AppMessageNack { transaction: TransactionId },
}

/// Command issued to the host runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum HostCommand {
    /// Open a URL through the host's URL-opening facility
    OpenUrl { url: String },
    /// Hand a configuration payload to the host's message transport
    SendAppMessage {
        transaction: TransactionId,
        payload: ConfigPayload,
    },
}
