#![allow(clippy::cargo_common_metadata)]
use anyhow::{Context, Result};
use kloros::{cli, config::Config, setup_logging};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Resolve command line arguments; --help and malformed input exit here
    let invocation = cli::parse_args();

    setup_logging()?;

    let config = Config::load().context("Invalid configuration")?;

    let code = cli::execute_command(&config, &invocation).context("Failed to run command")?;
    Ok(ExitCode::from(code))
}
