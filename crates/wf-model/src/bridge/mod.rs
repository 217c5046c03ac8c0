pub mod api;
pub mod error;

pub use api::{HostCommand, HostEvent, TransactionId};
pub use error::TransportError;
