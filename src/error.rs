//! Error types for the kloros CLI
//!
//! Configuration errors are fatal and abort startup before any command is
//! dispatched. An unrecognized command name is never an error.

use thiserror::Error;

/// Main error type for kloros
#[derive(Error, Debug)]
pub enum KlorosError {
    /// A command name was registered more than once
    #[error("Configuration error: command '{name}' is already registered")]
    DuplicateCommand { name: String },

    /// The default command does not name a registered command
    #[error("Configuration error: unknown command '{name}'")]
    UnknownCommand { name: String },

    /// The version provider returned a non-semantic version string
    #[error("Configuration error: invalid version '{version}'")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    /// Other configuration validation failures
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Writing command output failed
    #[error("Output error: failed to write command output")]
    Output {
        #[source]
        source: std::io::Error,
    },

    /// The logging subscriber could not be installed
    #[error("Logging error: {message}")]
    Logging { message: String },
}

impl KlorosError {
    /// Create a new duplicate command error
    pub fn duplicate_command(name: impl Into<String>) -> Self {
        Self::DuplicateCommand { name: name.into() }
    }

    /// Create a new unknown command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create a new invalid version error
    pub fn invalid_version(version: impl Into<String>, source: semver::Error) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new output error
    pub fn output(source: std::io::Error) -> Self {
        Self::Output { source }
    }

    /// Create a new logging error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Whether this error belongs to startup configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateCommand { .. }
                | Self::UnknownCommand { .. }
                | Self::InvalidVersion { .. }
                | Self::Config { .. }
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KlorosError>;
