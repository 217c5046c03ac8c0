//! Transport error type for the host bridge.

use thiserror::Error;

/// Error raised by a bridge transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The host closed the bridge unexpectedly
    #[error("bridge connection lost")]
    ConnectionLost,
    /// An outgoing command could not be serialized
    #[error("serialization error: {0}")]
    Serialization(String),
    /// An incoming event could not be deserialized
    #[error("deserialization error: {0}")]
    Deserialization(String),
    /// Any other transport failure
    #[error("transport error: {0}")]
    Other(String),
}
