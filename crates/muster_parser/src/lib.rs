//! Invocation parsing for Muster.
//!
//! This crate turns one line of chat input into a [`CallData`] against a
//! command schema. Three grammars share one backtrackable [`Cursor`]:
//! the invocation grammar itself ([`parse_call`]), the target-selector
//! mini-grammar ([`resolve_targets`]), and the JSON-shaped value
//! sub-grammar ([`json`]).
//!
//! # Modules
//!
//! - [`cursor`] - Backtrackable input cursor
//! - [`session`] - Per-invocation parser state
//! - [`call`] - The parse result carrier
//! - [`json`] - JSON-shaped object and array values
//! - [`selector`] - Target selector grammar and evaluation
//! - [`invoke`] - The invocation parser

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod call;
pub mod cursor;
pub mod invoke;
pub mod json;
pub mod selector;
pub mod session;

pub use call::{CallData, OptionTable};
pub use cursor::{Cursor, Mark};
pub use invoke::{parse_call, parse_call_with};
pub use selector::{parse_targets, resolve_targets, SelectorError};
pub use session::{ParseSession, Slot};
