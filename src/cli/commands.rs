//! Command implementations for the CLI

use crate::{
    cli::Invocation,
    config::Config,
    core::{CommandOutput, Dispatcher, health},
    error::Result,
};
use tracing::{debug, instrument};

/// Build the dispatcher for `config` with every kloros command registered
#[instrument(skip(config))]
pub fn build_dispatcher(config: &Config) -> Result<Dispatcher> {
    let mut dispatcher = Dispatcher::new(&config.program_name, &config.description);

    dispatcher.register("ping", "Health check (prints pong)", || {
        CommandOutput::success(health::ping())
    })?;

    let version = config.version.clone();
    dispatcher.register("version", "Print version", move || {
        CommandOutput::success(version.clone())
    })?;

    let info = config.info_line();
    dispatcher.register("info", "Basic info", move || {
        CommandOutput::success(info.clone())
    })?;

    dispatcher.set_default(&config.default_command)?;

    debug!(
        "Dispatcher ready with commands: {:?}",
        dispatcher.command_names().collect::<Vec<_>>()
    );
    Ok(dispatcher)
}

/// Execute the invocation against standard output and return the exit code
#[instrument(skip(config))]
pub fn execute_command(config: &Config, invocation: &Invocation) -> Result<u8> {
    if !invocation.residual.is_empty() {
        debug!("Ignoring trailing arguments: {:?}", invocation.residual);
    }

    let dispatcher = build_dispatcher(config)?;
    dispatcher.dispatch(invocation.command.as_deref())
}
