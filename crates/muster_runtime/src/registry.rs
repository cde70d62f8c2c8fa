//! Command registry and dispatch.
//!
//! The registry owns every registered [`Command`] and routes one line of
//! chat input to it: the first word picks the command (lookup is
//! case-insensitive), the rest of the line is parsed against the
//! command's schema, and a successful parse is handed to the command's
//! `run` hook.

use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

use muster_foundation::{CallError, PlayerId, Roster};
use muster_parser::{parse_call, CallData};
use muster_schema::Schema;

/// One executable chat command.
pub trait Command {
    /// The command's grammar, also the source of its registry name.
    fn schema(&self) -> &Schema;

    /// Executes a successfully parsed invocation.
    ///
    /// Returns the chat feedback line for the caller.
    fn run(&self, call: &CallData, roster: &dyn Roster) -> String;
}

/// A command could not be registered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A command with the same (case-folded) name already exists.
    #[error("a command named '{name}' is already registered")]
    DuplicateCommand {
        /// The conflicting registry name.
        name: String,
    },
    /// The command's schema carries an empty name.
    #[error("cannot register a command with an empty name")]
    UnnamedCommand,
}

/// A line of input could not be routed or parsed.
#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
    /// The line was empty (or only a slash).
    #[error("empty command line")]
    EmptyLine,
    /// The first word names no registered command.
    #[error("unknown command '{name}'")]
    UnknownCommand {
        /// The word that failed to resolve.
        name: String,
    },
    /// The invocation failed to parse against the command's schema.
    #[error(transparent)]
    Parse(#[from] CallError),
}

/// All registered commands, in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under its schema's name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCommand`] if a command with the
    /// same case-folded name exists, [`RegistryError::UnnamedCommand`]
    /// if the schema's name is empty.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), RegistryError> {
        let name = command.schema().name.to_lowercase();
        if name.is_empty() {
            return Err(RegistryError::UnnamedCommand);
        }
        if self.commands.contains_key(&name) {
            return Err(RegistryError::DuplicateCommand { name });
        }
        debug!("registered command '{name}'");
        self.commands.insert(name, command);
        Ok(())
    }

    /// Looks up a command by name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&name.to_lowercase()).map(Box::as_ref)
    }

    /// Iterates registered commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(Box::as_ref)
    }

    /// Registered command names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Routes one line of input to its command and runs it.
    ///
    /// A leading `/` is accepted and ignored, so both `/give ...` and
    /// `give ...` work.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] if the line is empty, names no
    /// registered command, or fails to parse against the command's
    /// schema.
    pub fn dispatch(
        &self,
        line: &str,
        caller: PlayerId,
        roster: &dyn Roster,
    ) -> Result<String, DispatchError> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest),
            None => (line, ""),
        };
        if name.is_empty() {
            return Err(DispatchError::EmptyLine);
        }
        let Some(command) = self.get(name) else {
            return Err(DispatchError::UnknownCommand {
                name: name.to_string(),
            });
        };

        debug!("dispatching '{name}' for caller {caller}");
        let mut call = parse_call(rest, command.schema(), caller, roster);
        match call.error.take() {
            Some(error) => Err(DispatchError::Parse(error)),
            None => Ok(command.run(&call, roster)),
        }
    }
}
