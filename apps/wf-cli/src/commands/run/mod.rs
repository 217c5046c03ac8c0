pub mod args;
pub mod handler;

pub use args::RunArgs;
pub use handler::{handle_run, run_session};
