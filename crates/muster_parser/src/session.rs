//! Per-invocation parser session state.
//!
//! All mutable state of one parse attempt lives here and is threaded
//! through the engine explicitly. Nothing survives across invocations;
//! the schema itself stays read-only and shareable.

/// Classification of the parameter currently being parsed.
///
/// The `Necessary`/`LastNecessary` split decides when a parameter
/// block's obligations end: once the final required parameter
/// (`LastNecessary`) has its minimum value, a required list stops
/// blocking the grammar and an open option no longer rejects further
/// option declarations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A required parameter with more required ones after it.
    Necessary,
    /// The final required parameter of the current list.
    LastNecessary,
    /// An optional or trailing parameter.
    Extra,
}

/// Mutable state of one invocation parse.
#[derive(Debug)]
pub struct ParseSession {
    /// Classification of the parameter currently being parsed.
    pub slot: Slot,
    /// Long name of the option whose *required* parameters are being
    /// parsed, if any. While set, encountering another option
    /// declaration is fatal.
    pub open_option: Option<String>,
    /// Long names of options already consumed, to reject repeats.
    pub used_options: Vec<String>,
}

impl ParseSession {
    /// Creates a fresh session for one parse attempt.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Slot::Necessary,
            open_option: None,
            used_options: Vec::new(),
        }
    }

    /// Whether the option was already consumed in this invocation.
    #[must_use]
    pub fn is_used(&self, long_name: &str) -> bool {
        self.used_options.iter().any(|n| n == long_name)
    }

    /// Records an option as consumed.
    pub fn mark_used(&mut self, long_name: &str) {
        self.used_options.push(long_name.to_string());
    }
}

impl Default for ParseSession {
    fn default() -> Self {
        Self::new()
    }
}
