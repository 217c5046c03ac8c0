//! Data model for the watchface companion bridge.
//!
//! Defines the color and configuration types returned by the settings
//! page, the fixed-key payload sent to the watchface binary, and the
//! message types exchanged with the host runtime. Serde-centric, no I/O.

pub mod bridge;
pub mod color;
pub mod config;
pub mod keys;
pub mod payload;

pub use bridge::{HostCommand, HostEvent, TransactionId, TransportError};
pub use color::{ColorParseError, Rgb};
pub use config::{ConfigDocument, ConfigError, Hand, HandColors};
pub use keys::AppKey;
pub use payload::ConfigPayload;
