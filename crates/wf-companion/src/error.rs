//! Error types for companion event handling

use thiserror::Error;
use wf_model::ConfigError;

/// Error raised while handling a host event.
///
/// Handler errors are reported to the caller but leave the companion in
/// a consistent state; the surrounding loop carries on dispatching.
#[derive(Debug, Error)]
pub enum CompanionError {
    /// The configuration result could not be decoded or parsed
    #[error("configuration result rejected: {0}")]
    Config(#[from] ConfigError),
}
