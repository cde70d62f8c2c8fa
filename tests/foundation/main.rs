//! Integration tests for the muster_foundation crate.
//!
//! Tests for core types:
//! - Value variants and accessors
//! - Ordered collections
//! - The invocation error taxonomy

mod collections;
