//! Fake bridge implementation for testing and development
//!
//! A transport that implements BridgeTransport without a host runtime
//! behind it. Tests queue the events they want delivered and inspect the
//! commands the companion sent.

use crate::transport::BridgeTransport;
use wf_model::{HostCommand, HostEvent, TransportError};

/// Fake bridge that can simulate host events
///
/// Implements BridgeTransport but:
/// - `send()` records the command for later inspection
/// - `receive()` returns queued events, then Ok(None)
#[derive(Debug, Default)]
pub struct FakeBridge {
    /// Queue of events to return from receive()
    event_queue: Vec<HostEvent>,
    /// Commands recorded by send()
    sent: Vec<HostCommand>,
}

impl FakeBridge {
    /// Create a new fake bridge with an empty event queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event to be returned by receive()
    pub fn queue_event(&mut self, event: HostEvent) {
        self.event_queue.push(event);
    }

    /// Commands sent so far, in order
    pub fn sent_commands(&self) -> &[HostCommand] {
        &self.sent
    }

    /// Take the recorded commands, leaving the bridge empty
    pub fn take_sent(&mut self) -> Vec<HostCommand> {
        core::mem::take(&mut self.sent)
    }
}

impl BridgeTransport for FakeBridge {
    fn send(&mut self, command: HostCommand) -> Result<(), TransportError> {
        log::debug!("FakeBridge: recording command {:?}", command);
        self.sent.push(command);
        Ok(())
    }

    fn receive(&mut self) -> Result<Option<HostEvent>, TransportError> {
        // Return queued events first, then None
        if !self.event_queue.is_empty() {
            Ok(Some(self.event_queue.remove(0)))
        } else {
            Ok(None)
        }
    }
}
