//! Host-runtime seam for the watchface companion.
//!
//! The host runtime owns event dispatch, URL opening and the message
//! transport to the watch. This crate defines the transport boundary the
//! companion talks through, plus a fake implementation for tests and
//! local development.

pub mod transport;

pub use transport::{BridgeTransport, FakeBridge};
