//! Command-line argument parsing
//!
//! The dispatcher only sees an [`Invocation`]. Names clap does not know are
//! captured as external subcommands so they reach the dispatcher's help
//! fallback instead of failing here.

use clap::{Parser, Subcommand};
use std::ffi::OsString;

/// KLoROS command-line interface
#[derive(Parser, Debug)]
#[command(name = "kloros", about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Args {
    /// Subcommand to execute (defaults to ping)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Health check (prints pong)
    Ping,

    /// Print version
    Version,

    /// Basic info
    Info,

    // Anything else; resolved by the dispatcher
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Command {
    /// Command name as registered with the dispatcher
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Ping => Some("ping"),
            Self::Version => Some("version"),
            Self::Info => Some("info"),
            Self::External(words) => words.first().map(String::as_str),
        }
    }
}

/// A resolved command line: optional command name plus leftover words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Command name, absent when none was given
    pub command: Option<String>,
    /// Words following an unrecognized command
    pub residual: Vec<String>,
}

impl From<Args> for Invocation {
    fn from(args: Args) -> Self {
        match args.command {
            Some(Command::External(mut words)) => {
                let command = (!words.is_empty()).then(|| words.remove(0));
                Self {
                    command,
                    residual: words,
                }
            }
            Some(command) => Self {
                command: command.name().map(str::to_string),
                residual: Vec::new(),
            },
            None => Self::default(),
        }
    }
}

/// Turns raw process arguments into an [`Invocation`]
pub trait ArgumentResolver {
    type Error: std::error::Error;

    fn resolve<I, T>(&self, argv: I) -> Result<Invocation, Self::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone;
}

/// Resolver backed by the clap definitions above
#[derive(Debug, Clone, Copy, Default)]
pub struct ClapResolver;

impl ArgumentResolver for ClapResolver {
    type Error = clap::Error;

    fn resolve<I, T>(&self, argv: I) -> Result<Invocation, Self::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Args::try_parse_from(argv).map(Invocation::from)
    }
}

/// Parse the process command line, exiting through clap on `--help` or bad input
pub fn parse_args() -> Invocation {
    ClapResolver
        .resolve(std::env::args_os())
        .unwrap_or_else(|e| e.exit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn resolve(argv: &[&str]) -> Invocation {
        ClapResolver.resolve(argv.iter().copied()).unwrap()
    }

    #[test]
    fn test_no_command() {
        assert_eq!(resolve(&["kloros"]), Invocation::default());
    }

    #[test]
    fn test_known_commands() {
        for name in ["ping", "version", "info"] {
            let invocation = resolve(&["kloros", name]);
            assert_eq!(invocation.command.as_deref(), Some(name));
            assert!(invocation.residual.is_empty());
        }
    }

    #[test]
    fn test_unknown_command_is_captured() {
        let invocation = resolve(&["kloros", "bogus-command", "--flag", "x"]);
        assert_eq!(invocation.command.as_deref(), Some("bogus-command"));
        assert_eq!(invocation.residual, vec!["--flag", "x"]);
    }

    #[test]
    fn test_help_word_reaches_dispatcher() {
        let invocation = resolve(&["kloros", "help"]);
        assert_eq!(invocation.command.as_deref(), Some("help"));
    }

    #[test]
    fn test_help_flag() {
        let err = ClapResolver.resolve(["kloros", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_known_command_rejects_extra_arguments() {
        assert!(ClapResolver.resolve(["kloros", "ping", "extra"]).is_err());
    }
}
