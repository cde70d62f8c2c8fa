//! The interactive console.
//!
//! A small read-dispatch-print loop for driving a command registry from
//! a terminal. Lines starting with `:` are console meta commands
//! (`:help`, `:who`, `:quit`); everything else is dispatched as a chat
//! command invocation on behalf of the configured caller.

use std::io::{self, Write};

use thiserror::Error;

use muster_foundation::{PlayerId, Roster, TableRoster};
use muster_schema::render_help;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::registry::CommandRegistry;

/// The console failed outside of normal command dispatch.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The line editor failed to initialize or read.
    #[error("line editor failure: {0}")]
    Editor(String),
}

/// The interactive console.
pub struct Console<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The commands available for dispatch.
    registry: CommandRegistry,

    /// The players invocations are resolved against.
    roster: TableRoster,

    /// The player issuing every invocation.
    caller: PlayerId,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Console<RustylineEditor> {
    /// Creates a console with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(
        registry: CommandRegistry,
        roster: TableRoster,
        caller: PlayerId,
    ) -> Result<Self, ConsoleError> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, registry, roster, caller))
    }
}

impl<E: LineEditor> Console<E> {
    /// Creates a console with the given editor.
    pub fn with_editor(
        mut editor: E,
        registry: CommandRegistry,
        roster: TableRoster,
        caller: PlayerId,
    ) -> Self {
        let mut keywords: Vec<String> =
            registry.names().map(String::from).collect();
        keywords.extend([":help".to_string(), ":who".to_string(), ":quit".to_string()]);
        editor.set_keywords(keywords);

        Self {
            editor,
            registry,
            roster,
            caller,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the command registry.
    #[must_use]
    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Runs the console loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-dispatch-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool, ConsoleError> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(trimmed);

        if let Some(keep_going) = self.try_meta(trimmed) {
            return Ok(keep_going);
        }

        match self.registry.dispatch(trimmed, self.caller, &self.roster) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(e) => {
                eprintln!("\x1b[31m{e}\x1b[0m");
            }
        }
        Ok(true)
    }

    /// Tries to handle a console meta command.
    ///
    /// Returns `Some(false)` to exit, `Some(true)` if the line was
    /// handled, `None` if it is a regular invocation.
    fn try_meta(&self, line: &str) -> Option<bool> {
        let mut words = line.split_whitespace();
        match words.next()? {
            ":quit" | ":exit" => Some(false),
            ":help" => {
                match words.next() {
                    Some(name) => match self.registry.get(name) {
                        Some(command) => print!("{}", render_help(command.schema())),
                        None => eprintln!("\x1b[31munknown command '{name}'\x1b[0m"),
                    },
                    None => {
                        for command in self.registry.iter() {
                            let schema = command.schema();
                            println!("/{:<12} {}", schema.name, schema.summary);
                        }
                        println!(":help <name>  show a command's full help page");
                        println!(":who          list players");
                        println!(":quit         exit");
                    }
                }
                Some(true)
            }
            ":who" => {
                for player in self.roster.players() {
                    let marker = if self.roster.is_admin(player) { "*" } else { " " };
                    let you = if player == self.caller { " (you)" } else { "" };
                    println!("{marker} {player} {}{you}", self.roster.display_name(player));
                }
                Some(true)
            }
            other if other.starts_with(':') => {
                eprintln!("\x1b[31munknown console command '{other}'\x1b[0m");
                Some(true)
            }
            _ => None,
        }
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("Muster console v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "{} command(s) registered. Type :help for a list, Ctrl+D to exit.\n",
            self.registry.len()
        );
        let _ = io::stdout().flush();
    }
}
