//! The result of one invocation parse.

use indexmap::IndexMap;

use muster_foundation::{ArgMap, CallError, PlayerId, Value};

/// Parsed option occurrences, keyed by long name in consumption order.
///
/// An option that declares no parameters maps to `None` (the
/// present-without-values marker); one with parameters maps to its own
/// value table.
pub type OptionTable = IndexMap<String, Option<ArgMap>>;

/// Carrier for everything one parse attempt produced.
///
/// Constructed fresh per attempt; ownership of all contained value
/// containers transfers to the caller with the result. Success is
/// exactly `error.is_none()`.
#[derive(Debug, Default)]
pub struct CallData {
    /// Resolved target players (only populated for schemas that
    /// require a target selector).
    pub targets: Vec<PlayerId>,
    /// Name of the matched subcommand; empty for the default.
    pub sub_command: String,
    /// Parsed subcommand parameter values, keyed by variable name.
    pub params: ArgMap,
    /// Parsed option occurrences.
    pub options: OptionTable,
    /// The first fatal condition met, if any.
    pub error: Option<CallError>,
}

impl CallData {
    /// Creates an empty, successful result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result carrying the given error.
    #[must_use]
    pub fn failed(error: CallError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Returns true if parsing succeeded.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }

    /// Gets a parsed parameter value by variable name.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Returns true if the option was supplied.
    #[must_use]
    pub fn has_option(&self, long_name: &str) -> bool {
        self.options.contains_key(long_name)
    }

    /// Gets an option's own parameter values, if it was supplied with
    /// any.
    #[must_use]
    pub fn option_params(&self, long_name: &str) -> Option<&ArgMap> {
        self.options.get(long_name).and_then(Option::as_ref)
    }

    /// Renders the error message for a failed parse.
    ///
    /// Pure formatting; severity and routing are the caller's concern.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}
