//! Event dispatch for the watchface companion
//!
//! Events in, commands out. The companion never talks to a transport
//! directly; the caller receives the commands each event produced and
//! forwards them over whatever bridge it runs on.

use crate::config::CompanionConfig;
use crate::error::CompanionError;
use wf_model::{
    ConfigDocument, ConfigPayload, HandColors, HostCommand, HostEvent, TransactionId,
};

/// Counters for send outcomes observed so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompanionStats {
    /// App messages handed to the host for delivery
    pub sends: u32,
    /// Sends the host acknowledged
    pub delivered: u32,
    /// Sends the host rejected
    pub failed: u32,
}

/// The phone-side companion for the watchface.
///
/// Reacts to host runtime events: opens the configuration page on
/// request, parses the page's result and forwards the assembled color
/// payload to the watchface binary. Each send stays tracked until the
/// host reports its outcome.
pub struct Companion {
    /// Session settings
    config: CompanionConfig,
    /// Next transaction id to assign
    next_transaction: u32,
    /// Sends awaiting an ack or nack, newest last
    in_flight: Vec<(TransactionId, ConfigPayload)>,
    /// Outcome counters
    stats: CompanionStats,
}

impl Companion {
    /// Create a companion with the given settings
    pub fn new(config: CompanionConfig) -> Self {
        Self {
            config,
            next_transaction: 1,
            in_flight: Vec::new(),
            stats: CompanionStats::default(),
        }
    }

    /// The session settings
    pub fn config(&self) -> &CompanionConfig {
        &self.config
    }

    /// Outcome counters observed so far
    pub fn stats(&self) -> CompanionStats {
        self.stats
    }

    /// Number of sends still awaiting an outcome
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Handle one host event, returning the commands it produced.
    ///
    /// An error means the event was rejected (for example a malformed
    /// configuration result); the companion itself stays consistent and
    /// the caller may keep dispatching.
    pub fn handle(&mut self, event: HostEvent) -> Result<Vec<HostCommand>, CompanionError> {
        match event {
            HostEvent::Ready => {
                log::info!("Host runtime ready");
                Ok(Vec::new())
            }
            HostEvent::ShowConfiguration => {
                log::info!("Showing configuration page: {}", self.config.settings_url);
                Ok(vec![HostCommand::OpenUrl {
                    url: self.config.settings_url.clone(),
                }])
            }
            HostEvent::WebviewClosed { response } => self.handle_webview_closed(&response),
            HostEvent::AppMessageAck { transaction } => {
                match self.take_in_flight(transaction) {
                    Some(payload) => {
                        log::info!("Send successful: {:?}", payload);
                        self.stats.delivered += 1;
                    }
                    None => {
                        log::warn!("Ack for unknown transaction {}, ignoring", transaction);
                    }
                }
                Ok(Vec::new())
            }
            HostEvent::AppMessageNack { transaction } => {
                match self.take_in_flight(transaction) {
                    Some(_) => {
                        log::error!("Send failed for transaction {}", transaction);
                        self.stats.failed += 1;
                    }
                    None => {
                        log::warn!("Nack for unknown transaction {}, ignoring", transaction);
                    }
                }
                Ok(Vec::new())
            }
        }
    }

    /// Parse a configuration result and queue the payload send.
    ///
    /// Nothing is sent on a parse failure; a partial payload is never
    /// transmitted.
    fn handle_webview_closed(
        &mut self,
        response: &str,
    ) -> Result<Vec<HostCommand>, CompanionError> {
        let document = ConfigDocument::from_webview_response(response)?;
        log::info!("Configuration page returned: {:?}", document);

        let colors = HandColors::try_from(&document)?;
        let payload = ConfigPayload::from(&colors);

        let transaction = TransactionId(self.next_transaction);
        self.next_transaction += 1;
        self.in_flight.push((transaction, payload));
        self.stats.sends += 1;

        Ok(vec![HostCommand::SendAppMessage {
            transaction,
            payload,
        }])
    }

    /// Remove and return the in-flight payload for a transaction, if any.
    ///
    /// Returns None for unknown or already-resolved transactions, which
    /// keeps ack/nack exactly-once: the first outcome wins.
    fn take_in_flight(&mut self, transaction: TransactionId) -> Option<ConfigPayload> {
        let index = self
            .in_flight
            .iter()
            .position(|(id, _)| *id == transaction)?;
        Some(self.in_flight.remove(index).1)
    }
}

impl Default for Companion {
    fn default() -> Self {
        Self::new(CompanionConfig::default())
    }
}
