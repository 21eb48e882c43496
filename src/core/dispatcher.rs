//! Command dispatch
//!
//! Maps an optional command name to a registered handler. A missing name
//! falls back to the default command; a name that is not registered prints
//! the help listing and still exits with 0.

use crate::error::{KlorosError, Result};
use indexmap::IndexMap;
use std::{fmt, io::Write};
use tracing::{debug, instrument};

/// Text and exit code produced by a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text written to standard output
    pub text: String,
    /// Process exit code
    pub exit_code: u8,
}

impl CommandOutput {
    /// Output of a handler that succeeded
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: 0,
        }
    }
}

/// Zero-argument command handler
pub type Handler = Box<dyn Fn() -> CommandOutput>;

struct CommandEntry {
    help: String,
    handler: Handler,
}

/// What a command name resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Run the handler registered under this name
    Run(&'a str),
    /// Print the help listing
    Help,
}

/// Routes command names to handlers
pub struct Dispatcher {
    program_name: String,
    description: String,
    commands: IndexMap<String, CommandEntry>,
    default_command: Option<String>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("program_name", &self.program_name)
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .field("default_command", &self.default_command)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher with an empty command table
    pub fn new(program_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
            description: description.into(),
            commands: IndexMap::new(),
            default_command: None,
        }
    }

    /// Register a handler under `name`
    ///
    /// Registration order is the order commands appear in the help listing.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        handler: F,
    ) -> Result<()>
    where
        F: Fn() -> CommandOutput + 'static,
    {
        let name = name.into();
        if self.commands.contains_key(&name) {
            return Err(KlorosError::duplicate_command(name));
        }

        debug!("Registering command: {}", name);
        self.commands.insert(
            name,
            CommandEntry {
                help: help.into(),
                handler: Box::new(handler),
            },
        );
        Ok(())
    }

    /// Designate the command run when no name is given
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if !self.commands.contains_key(name) {
            return Err(KlorosError::unknown_command(name));
        }
        self.default_command = Some(name.to_string());
        Ok(())
    }

    /// The default command, if one has been set
    pub fn default_command(&self) -> Option<&str> {
        self.default_command.as_deref()
    }

    /// Registered command names in registration order
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Resolve an optional command name without running anything
    pub fn resolve(&self, name: Option<&str>) -> Resolution<'_> {
        name.or(self.default_command.as_deref())
            .and_then(|name| self.commands.get_key_value(name))
            .map_or(Resolution::Help, |(name, _)| Resolution::Run(name.as_str()))
    }

    /// Run the resolved command and write its output to `out`
    ///
    /// Returns the handler's exit code, or 0 when the help listing is shown.
    /// Only a failing writer produces an error.
    #[instrument(skip(self, out))]
    pub fn dispatch_to<W: Write>(&self, name: Option<&str>, out: &mut W) -> Result<u8> {
        match self.resolve(name) {
            Resolution::Run(resolved) => {
                debug!("Dispatching command: {}", resolved);
                let output = (self.commands[resolved].handler)();
                writeln!(out, "{}", output.text).map_err(KlorosError::output)?;
                out.flush().map_err(KlorosError::output)?;
                Ok(output.exit_code)
            }
            Resolution::Help => {
                debug!("No handler for {:?}, showing help", name);
                out.write_all(self.help_text().as_bytes())
                    .map_err(KlorosError::output)?;
                out.flush().map_err(KlorosError::output)?;
                Ok(0)
            }
        }
    }

    /// Run the resolved command against standard output
    pub fn dispatch(&self, name: Option<&str>) -> Result<u8> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.dispatch_to(name, &mut handle)
    }

    /// Help listing: description, usage line, and one row per command
    pub fn help_text(&self) -> String {
        let width = self.commands.keys().map(String::len).max().unwrap_or(0);
        let rows: String = self
            .commands
            .iter()
            .map(|(name, entry)| format!("  {name:<width$}  {}\n", entry.help))
            .collect();

        format!(
            "{}\n\nUsage: {} [COMMAND]\n\nCommands:\n{}",
            self.description, self.program_name, rows
        )
    }
}
