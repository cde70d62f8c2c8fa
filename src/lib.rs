//! Muster - Invocation-parsing engine for in-game chat commands
//!
//! This crate re-exports all layers of the Muster system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: muster_runtime    - Command registry, dispatch, console
//! Layer 2: muster_parser     - Invocation, selector, and JSON parsing
//! Layer 1: muster_schema     - Schemas, builder, help rendering
//! Layer 0: muster_foundation - Core types (Value, PlayerId, CallError)
//! ```

pub use muster_foundation as foundation;
pub use muster_parser as parser;
pub use muster_runtime as runtime;
pub use muster_schema as schema;
