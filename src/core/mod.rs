//! Core functionality for the CLI
//!
//! Contains the command dispatcher and the health check it serves.

pub mod dispatcher;
pub mod health;

pub use dispatcher::{CommandOutput, Dispatcher, Handler, Resolution};
