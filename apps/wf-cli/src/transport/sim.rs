//! Scripted in-process host
//!
//! Plays the host runtime's side of a configuration round: ready, the
//! configuration request, then a configuration result synthesized from
//! the given colors. App messages are acknowledged (or rejected under
//! `fail_send`) and every received command is printed.

use std::collections::VecDeque;

use wf_host::BridgeTransport;
use wf_model::{HostCommand, HostEvent, TransportError};

/// Options controlling the scripted host
#[derive(Debug, Clone)]
pub struct SimOptions {
    /// Minute hand color in the synthesized result
    pub minute_color: String,
    /// Hour hand color in the synthesized result
    pub hour_color: String,
    /// Reject the app message instead of acknowledging it
    pub fail_send: bool,
    /// Really open the settings URL in the system browser
    pub open_browser: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            minute_color: "0xFFFFFF".to_string(),
            hour_color: "0x000000".to_string(),
            fail_send: false,
            open_browser: false,
        }
    }
}

/// In-process host bridge playing a scripted configuration round
pub struct SimBridge {
    options: SimOptions,
    /// Events not yet delivered to the companion
    pending: VecDeque<HostEvent>,
    /// Commands received so far, for inspection
    received: Vec<HostCommand>,
}

impl SimBridge {
    pub fn new(options: SimOptions) -> Self {
        // The same shape the real configuration page produces: JSON,
        // percent-encoded
        let json = serde_json::json!({
            "minute_hand_color": options.minute_color,
            "hour_hand_color": options.hour_color,
        })
        .to_string();
        let response = urlencoding::encode(&json).into_owned();

        let pending = VecDeque::from([
            HostEvent::Ready,
            HostEvent::ShowConfiguration,
            HostEvent::WebviewClosed { response },
        ]);

        Self {
            options,
            pending,
            received: Vec::new(),
        }
    }

    /// Commands received so far, in order
    pub fn received_commands(&self) -> &[HostCommand] {
        &self.received
    }
}

impl BridgeTransport for SimBridge {
    fn send(&mut self, command: HostCommand) -> Result<(), TransportError> {
        match &command {
            HostCommand::OpenUrl { url } => {
                println!("sim: openUrl {}", url);
                if self.options.open_browser {
                    open::that(url)
                        .map_err(|e| TransportError::Other(format!("Failed to open URL: {e}")))?;
                }
            }
            HostCommand::SendAppMessage {
                transaction,
                payload,
            } => {
                let json = serde_json::to_string(payload).map_err(|e| {
                    TransportError::Serialization(format!("JSON serialize error: {e}"))
                })?;
                println!("sim: sendAppMessage #{} {}", transaction, json);

                let outcome = if self.options.fail_send {
                    HostEvent::AppMessageNack {
                        transaction: *transaction,
                    }
                } else {
                    HostEvent::AppMessageAck {
                        transaction: *transaction,
                    }
                };
                self.pending.push_back(outcome);
            }
        }

        self.received.push(command);
        Ok(())
    }

    fn receive(&mut self) -> Result<Option<HostEvent>, TransportError> {
        Ok(self.pending.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_model::{ConfigPayload, TransactionId};

    fn payload() -> ConfigPayload {
        ConfigPayload {
            minute_r: 1,
            minute_g: 2,
            minute_b: 3,
            hour_r: 4,
            hour_g: 5,
            hour_b: 6,
        }
    }

    #[test]
    fn test_scripted_events_in_order() {
        let mut bridge = SimBridge::new(SimOptions::default());

        assert_eq!(bridge.receive().unwrap(), Some(HostEvent::Ready));
        assert_eq!(bridge.receive().unwrap(), Some(HostEvent::ShowConfiguration));
        match bridge.receive().unwrap() {
            Some(HostEvent::WebviewClosed { response }) => {
                // Decodes back to the configured colors
                let decoded = urlencoding::decode(&response).unwrap();
                assert!(decoded.contains("0xFFFFFF"));
                assert!(decoded.contains("0x000000"));
            }
            other => panic!("Expected WebviewClosed, got {:?}", other),
        }
        assert_eq!(bridge.receive().unwrap(), None);
    }

    #[test]
    fn test_app_message_is_acknowledged() {
        let mut bridge = SimBridge::new(SimOptions::default());
        while bridge.receive().unwrap().is_some() {}

        bridge
            .send(HostCommand::SendAppMessage {
                transaction: TransactionId(5),
                payload: payload(),
            })
            .unwrap();

        assert_eq!(
            bridge.receive().unwrap(),
            Some(HostEvent::AppMessageAck {
                transaction: TransactionId(5),
            })
        );
    }

    #[test]
    fn test_fail_send_rejects_app_message() {
        let mut bridge = SimBridge::new(SimOptions {
            fail_send: true,
            ..SimOptions::default()
        });
        while bridge.receive().unwrap().is_some() {}

        bridge
            .send(HostCommand::SendAppMessage {
                transaction: TransactionId(5),
                payload: payload(),
            })
            .unwrap();

        assert_eq!(
            bridge.receive().unwrap(),
            Some(HostEvent::AppMessageNack {
                transaction: TransactionId(5),
            })
        );
    }

    #[test]
    fn test_commands_are_recorded() {
        let mut bridge = SimBridge::new(SimOptions::default());
        bridge
            .send(HostCommand::OpenUrl {
                url: "https://example.com/".to_string(),
            })
            .unwrap();

        assert_eq!(bridge.received_commands().len(), 1);
    }
}
