//! Subcommand, option, and schema definitions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::param::Param;

/// A named grammatical variant of a command with its own parameter sets.
///
/// The subcommand with the empty name is the default: it is used when
/// the first input token matches no declared subcommand name.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubCommand {
    /// Subcommand name; empty for the default subcommand.
    pub name: String,
    /// Description shown on the help page.
    pub description: String,
    /// Parameters that must be present, in declaration order.
    pub required: Vec<Param>,
    /// Parameters that may follow the required ones, in order.
    pub optional: Vec<Param>,
}

impl SubCommand {
    /// Creates an empty subcommand with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// An independently declarable `--long`/`-s` modifier with its own
/// parameter sets.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CmdOption {
    /// Long name, at least two characters, written as `--long`.
    pub long_name: String,
    /// Short name, exactly one character, written as `-s`.
    pub short_name: char,
    /// Description shown on the help page.
    pub description: String,
    /// Parameters that must follow the option declaration.
    pub required: Vec<Param>,
    /// Parameters that may follow the required ones.
    pub optional: Vec<Param>,
}

impl CmdOption {
    /// Creates an option with the given names and no parameters.
    #[must_use]
    pub fn new(long_name: impl Into<String>, short_name: char) -> Self {
        Self {
            long_name: long_name.into(),
            short_name,
            description: String::new(),
            required: Vec::new(),
            optional: Vec::new(),
        }
    }

    /// Returns true if the option declares any parameters.
    #[must_use]
    pub fn has_params(&self) -> bool {
        !self.required.is_empty() || !self.optional.is_empty()
    }
}

/// Immutable-once-built description of one chat command.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schema {
    /// Command name (registry lookup lower-cases it).
    pub name: String,
    /// Help-page grouping label.
    pub group: String,
    /// One-line summary for help listings.
    pub summary: String,
    /// Declared subcommands; the first is the default.
    pub sub_commands: Vec<SubCommand>,
    /// Declared options, shared by all subcommands.
    pub options: Vec<CmdOption>,
    /// Whether invocations start with a target-selector expression.
    pub requires_target: bool,
}

impl Schema {
    /// Looks up a subcommand by exact (case-sensitive) name.
    #[must_use]
    pub fn sub_command(&self, name: &str) -> Option<&SubCommand> {
        self.sub_commands.iter().find(|s| s.name == name)
    }

    /// The default subcommand: the first one declared.
    #[must_use]
    pub fn default_sub_command(&self) -> Option<&SubCommand> {
        self.sub_commands.first()
    }

    /// Looks up an option by exact long name.
    #[must_use]
    pub fn long_option(&self, name: &str) -> Option<&CmdOption> {
        self.options.iter().find(|o| o.long_name == name)
    }

    /// Looks up an option by short name.
    #[must_use]
    pub fn short_option(&self, name: char) -> Option<&CmdOption> {
        self.options.iter().find(|o| o.short_name == name)
    }
}
