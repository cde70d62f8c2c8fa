//! Cross-layer integration tests for Muster.
//!
//! Tests that verify correct interaction between multiple crates:
//! schema construction, invocation parsing, and registry dispatch.

mod end_to_end;
