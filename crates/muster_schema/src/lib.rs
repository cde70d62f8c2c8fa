//! Declarative command schemas for Muster.
//!
//! A [`Schema`] describes one chat command: its subcommands, its
//! `--long`/`-s` options, and the typed parameters each of them takes.
//! Schemas are built once through the stateful [`SchemaBuilder`] and are
//! read-only during parsing.
//!
//! # Modules
//!
//! - [`param`] - Parameter descriptors (kind, list flag, variable name)
//! - [`schema`] - Subcommand, option, and schema definitions
//! - [`builder`] - The draft-based schema builder
//! - [`help`] - Auto-generated help-page rendering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod help;
pub mod param;
pub mod schema;

pub use builder::SchemaBuilder;
pub use help::render_help;
pub use param::{BoolStyle, Param, ParamKind};
pub use schema::{CmdOption, Schema, SubCommand};
