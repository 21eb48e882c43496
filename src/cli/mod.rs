//! Command-line interface module
//!
//! Provides argument resolution and command execution.

pub mod args;
pub mod commands;

pub use args::{ArgumentResolver, Args, ClapResolver, Command, Invocation, parse_args};
pub use commands::{build_dispatcher, execute_command};
