//! Command registry, dispatch, and interactive console for Muster.
//!
//! This crate provides:
//! - [`Command`] / [`CommandRegistry`] - Registration and dispatch of
//!   chat commands
//! - [`Console`] - An interactive console for driving a registry
//! - [`LineEditor`] - Line editor abstraction (rustyline by default)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod console;
pub mod editor;
pub mod registry;

pub use console::{Console, ConsoleError};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use registry::{Command, CommandRegistry, DispatchError, RegistryError};
