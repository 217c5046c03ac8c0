pub mod sim;
pub mod specifier;
pub mod stdio;

pub use sim::{SimBridge, SimOptions};
pub use specifier::HostSpecifier;
pub use stdio::StdioBridge;
