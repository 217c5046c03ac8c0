//! Bridge transport trait
//!
//! Defines the interface between the companion and the host runtime.
//! Commands are consumed (moved) on send; receive yields the next event,
//! or `None` once the host has closed the bridge.
//!
//! The transport handles serialization/deserialization internally.

pub mod fake;

pub use fake::FakeBridge;

use wf_model::{HostCommand, HostEvent, TransportError};

/// Trait for host bridge implementations
///
/// The companion issues commands and polls events through this trait;
/// callers never see bytes or framing.
pub trait BridgeTransport {
    /// Send a command to the host runtime (consumes the command)
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the command was handed to the host
    /// * `Err(TransportError)` if sending failed
    fn send(&mut self, command: HostCommand) -> Result<(), TransportError>;

    /// Receive the next event from the host runtime
    ///
    /// # Returns
    ///
    /// * `Ok(Some(HostEvent))` if an event arrived
    /// * `Ok(None)` once the host has closed the bridge
    /// * `Err(TransportError)` if receiving failed
    fn receive(&mut self) -> Result<Option<HostEvent>, TransportError>;
}
