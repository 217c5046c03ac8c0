//! Companion behavior for the watchface.
//!
//! Sits between the host runtime and the watchface binary: reacts to
//! lifecycle events, opens the remote configuration page, parses the
//! returned colors and forwards the configuration payload, tracking each
//! send until the host reports its outcome.

pub mod companion;
pub mod config;
pub mod error;

pub use companion::{Companion, CompanionStats};
pub use config::CompanionConfig;
pub use error::CompanionError;
