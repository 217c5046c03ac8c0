//! Command line harness for the watchface companion.
//!
//! Runs the companion against a real host bridge on stdin/stdout or a
//! scripted in-process host for local poking.

pub mod commands;
pub mod messages;
pub mod transport;
