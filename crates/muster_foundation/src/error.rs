//! The closed error taxonomy for invocation parsing.
//!
//! Parse failures are data, not panics: the parser stops at the first
//! fatal condition and stores the [`CallError`] inside the call result.
//! Message rendering is pure; presentation (colors, console routing) is
//! the host's concern.

use thiserror::Error;

/// A fatal condition met while parsing one invocation.
///
/// Each variant carries the cause text that its message template needs:
/// the missing parameter name, the offending option text, the unconsumed
/// remainder, or the selector expression.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CallError {
    /// A non-functional tokenizer was supplied. Unreachable with a
    /// well-formed cursor; kept so hosts can surface dead input sources.
    #[error("internal error: the command tokenizer is not functional")]
    BadParser,

    /// The schema declares zero subcommands (configuration defect).
    #[error("this command declares no subcommands")]
    NoSubCommands,

    /// A required parameter of the subcommand could not be parsed.
    #[error("missing or invalid required parameter '{param}'")]
    NoRequiredParam {
        /// Display name of the parameter that failed.
        param: String,
    },

    /// A required parameter of an open option could not be parsed.
    #[error("missing required parameter for option '{option}'")]
    NoRequiredParamForOption {
        /// Long name of the option whose obligation was not met.
        option: String,
    },

    /// An undeclared long option was supplied.
    #[error("unknown option '{text}'")]
    UnknownOption {
        /// The option text as read, including the leading dashes.
        text: String,
    },

    /// An undeclared short option character was supplied.
    #[error("unknown short option '{name}'")]
    UnknownShortOption {
        /// The short option character.
        name: char,
    },

    /// The same option was supplied twice in one invocation.
    #[error("option '{option}' was given more than once")]
    RepeatedOption {
        /// Long name of the repeated option.
        option: String,
    },

    /// Non-whitespace input remained after the grammar completed.
    #[error("unused trailing input: '{rest}'")]
    UnusedCommandParameters {
        /// The unconsumed remainder text.
        rest: String,
    },

    /// More than one option in a short-option bundle declares parameters.
    #[error("ambiguous option bundle '{bundle}': more than one option takes parameters")]
    MultipleOptionsWithParams {
        /// The whole bundle text, including the leading dash.
        bundle: String,
    },

    /// The target selector expression is syntactically malformed.
    #[error("could not parse target selector '{expr}'")]
    IncorrectTargetList {
        /// The selector expression as read.
        expr: String,
    },

    /// A syntactically valid selector resolved to zero players.
    #[error("target selector '{expr}' matches no players")]
    EmptyTargetList {
        /// The selector expression as read.
        expr: String,
    },
}

/// Discriminant for [`CallError`], for severity decisions and tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CallErrorKind {
    /// See [`CallError::BadParser`].
    BadParser,
    /// See [`CallError::NoSubCommands`].
    NoSubCommands,
    /// See [`CallError::NoRequiredParam`].
    NoRequiredParam,
    /// See [`CallError::NoRequiredParamForOption`].
    NoRequiredParamForOption,
    /// See [`CallError::UnknownOption`].
    UnknownOption,
    /// See [`CallError::UnknownShortOption`].
    UnknownShortOption,
    /// See [`CallError::RepeatedOption`].
    RepeatedOption,
    /// See [`CallError::UnusedCommandParameters`].
    UnusedCommandParameters,
    /// See [`CallError::MultipleOptionsWithParams`].
    MultipleOptionsWithParams,
    /// See [`CallError::IncorrectTargetList`].
    IncorrectTargetList,
    /// See [`CallError::EmptyTargetList`].
    EmptyTargetList,
}

impl CallError {
    /// Returns the discriminant of this error.
    #[must_use]
    pub fn kind(&self) -> CallErrorKind {
        match self {
            Self::BadParser => CallErrorKind::BadParser,
            Self::NoSubCommands => CallErrorKind::NoSubCommands,
            Self::NoRequiredParam { .. } => CallErrorKind::NoRequiredParam,
            Self::NoRequiredParamForOption { .. } => CallErrorKind::NoRequiredParamForOption,
            Self::UnknownOption { .. } => CallErrorKind::UnknownOption,
            Self::UnknownShortOption { .. } => CallErrorKind::UnknownShortOption,
            Self::RepeatedOption { .. } => CallErrorKind::RepeatedOption,
            Self::UnusedCommandParameters { .. } => CallErrorKind::UnusedCommandParameters,
            Self::MultipleOptionsWithParams { .. } => CallErrorKind::MultipleOptionsWithParams,
            Self::IncorrectTargetList { .. } => CallErrorKind::IncorrectTargetList,
            Self::EmptyTargetList { .. } => CallErrorKind::EmptyTargetList,
        }
    }

    /// Returns the cause text attached to this error, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::BadParser | Self::NoSubCommands => None,
            Self::NoRequiredParam { param } => Some(param),
            Self::NoRequiredParamForOption { option } | Self::RepeatedOption { option } => {
                Some(option)
            }
            Self::UnknownOption { text } => Some(text),
            Self::UnknownShortOption { .. } => None,
            Self::UnusedCommandParameters { rest } => Some(rest),
            Self::MultipleOptionsWithParams { bundle } => Some(bundle),
            Self::IncorrectTargetList { expr } | Self::EmptyTargetList { expr } => Some(expr),
        }
    }
}
