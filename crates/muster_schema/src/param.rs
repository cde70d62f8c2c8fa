//! Parameter descriptors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The grammar a parameter value is parsed with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamKind {
    /// `true`/`enable`/`on`/`yes` or `false`/`disable`/`off`/`no`,
    /// case-insensitive.
    Bool,
    /// Integer literal.
    Int,
    /// Floating-point literal.
    Float,
    /// Quoted string (may be empty) or bare non-empty token.
    Text,
    /// Consumes all remaining input verbatim (may be empty). Must be the
    /// last parameter appended to its list.
    Remainder,
    /// JSON-shaped object, stored as a nested map value.
    Object,
    /// JSON-shaped array, stored as a nested list value.
    Array,
}

/// How a boolean parameter is presented in help text.
///
/// Purely cosmetic: the parse grammar accepts every pair regardless.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoolStyle {
    /// `true|false`
    #[default]
    TrueFalse,
    /// `on|off`
    OnOff,
    /// `yes|no`
    YesNo,
    /// `enable|disable`
    EnableDisable,
}

impl BoolStyle {
    /// Returns the (affirmative, negative) word pair for this style.
    #[must_use]
    pub const fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::TrueFalse => ("true", "false"),
            Self::OnOff => ("on", "off"),
            Self::YesNo => ("yes", "no"),
            Self::EnableDisable => ("enable", "disable"),
        }
    }
}

/// One declared parameter of a subcommand or option.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Param {
    /// Name shown in help and error messages.
    pub display_name: String,
    /// The value grammar.
    pub kind: ParamKind,
    /// Whether the parameter greedily accepts repeated values.
    pub allows_list: bool,
    /// Key the parsed value is stored under; defaults to `display_name`.
    pub variable_name: Option<String>,
    /// Presentation style for `Bool` parameters.
    pub bool_style: BoolStyle,
}

impl Param {
    /// Creates a scalar parameter.
    #[must_use]
    pub fn new(display_name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            display_name: display_name.into(),
            kind,
            allows_list: false,
            variable_name: None,
            bool_style: BoolStyle::default(),
        }
    }

    /// Marks the parameter as a greedy list.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.allows_list = true;
        self
    }

    /// Overrides the storage key for the parsed value.
    #[must_use]
    pub fn with_variable_name(mut self, name: impl Into<String>) -> Self {
        self.variable_name = Some(name.into());
        self
    }

    /// Sets the help presentation style for a boolean parameter.
    #[must_use]
    pub const fn with_bool_style(mut self, style: BoolStyle) -> Self {
        self.bool_style = style;
        self
    }

    /// The key the parsed value is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        self.variable_name.as_deref().unwrap_or(&self.display_name)
    }
}
