//! Core types, values, and ordered collections for Muster.
//!
//! This crate provides:
//! - [`Value`] - The value type for parsed parameter and option data
//! - [`ArgMap`] / [`ArgList`] - Insertion-ordered containers for values
//! - [`PlayerId`] / [`Roster`] - Player identity and roster queries
//! - [`CallError`] - The closed error taxonomy for invocation parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod player;
pub mod value;

pub use collections::{ArgList, ArgMap};
pub use error::{CallError, CallErrorKind};
pub use player::{PlayerId, Roster, TableRoster};
pub use value::{Kind, Value};
