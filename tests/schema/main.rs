//! Integration tests for the muster_schema crate.
//!
//! Tests for schema construction and presentation:
//! - The draft-based builder
//! - Help-page rendering

mod builder;
