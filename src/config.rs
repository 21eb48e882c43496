//! Configuration for a single kloros run
//!
//! Built once at process start and handed to the dispatcher and handlers.

use crate::error::{KlorosError, Result};

/// Crate version compiled into the binary
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program name used in usage lines
    pub program_name: String,
    /// Product name used in human-facing output
    pub display_name: String,
    /// One-line program description shown at the top of help
    pub description: String,
    /// Semantic version string reported by `version` and `info`
    pub version: String,
    /// Command run when none is given
    pub default_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program_name: "kloros".to_string(),
            display_name: "KLoROS".to_string(),
            description: "KLoROS command-line interface".to_string(),
            version: VERSION.to_string(),
            default_command: "ping".to_string(),
        }
    }
}

impl Config {
    /// Create the validated configuration for this build
    pub fn load() -> Result<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("program_name", &self.program_name),
            ("display_name", &self.display_name),
            ("description", &self.description),
            ("default_command", &self.default_command),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(KlorosError::config(format!("{field} must not be empty")));
            }
        }

        semver::Version::parse(&self.version)
            .map_err(|e| KlorosError::invalid_version(&self.version, e))?;

        Ok(())
    }

    /// Text printed by the `info` command
    pub fn info_line(&self) -> String {
        format!("{} {} - CLI ready", self.display_name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::load().unwrap();
        assert_eq!(config.program_name, "kloros");
        assert_eq!(config.default_command, "ping");
        assert_eq!(config.version, VERSION);
    }

    #[test]
    fn test_info_line() {
        let config = Config {
            version: "1.2.3".to_string(),
            ..Config::default()
        };
        assert_eq!(config.info_line(), "KLoROS 1.2.3 - CLI ready");
    }

    #[test]
    fn test_rejects_non_semver_version() {
        let config = Config {
            version: "v1".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, KlorosError::InvalidVersion { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_rejects_empty_default_command() {
        let config = Config {
            default_command: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(KlorosError::Config { .. })
        ));
    }
}
