//! Error types for the message interpreter.

use message_format_locale::LocaleDataError;
use thiserror::Error;

use crate::tree::TreeError;

/// Errors that occur while compiling a message tree.
///
/// A well-formed tree from a conforming parser only fails to compile when the
/// locale is invalid; the other variants flag trees that violate the parser's
/// structural guarantees.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The parser's wire output could not be decoded.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// `#` appeared outside any plural or selectordinal branch.
    #[error("'#' used outside of a plural or selectordinal argument")]
    HashOutsidePlural,

    /// A plural or select argument has no `other` branch.
    #[error("argument '{id}' has no 'other' branch")]
    MissingOtherBranch { id: String },

    /// A `=N` selector whose `N` is not a number.
    #[error("invalid exact selector '{key}' in argument '{id}'")]
    InvalidExactSelector { id: String, key: String },

    /// The locale tag could not be resolved.
    #[error(transparent)]
    Locale(#[from] LocaleDataError),
}

/// An error that occurred while formatting a message.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Strict mode only: arguments referenced by the message were not
    /// supplied. Listed once each, in the order they were first referenced.
    #[error("missing parameters: {}", missing_params.join(", "))]
    MissingParameters { missing_params: Vec<String> },

    /// An argument has the wrong type for its placeholder.
    #[error("argument '{id}' must be {expected}")]
    InvalidArgument { id: String, expected: &'static str },

    /// The locale service could not render a value.
    #[error(transparent)]
    LocaleData(#[from] LocaleDataError),
}

impl FormatError {
    pub(crate) fn invalid_argument(id: &str, expected: &'static str) -> Self {
        FormatError::InvalidArgument {
            id: id.to_string(),
            expected,
        }
    }
}

/// Either stage of a one-shot [`crate::format_message`] call.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Format(#[from] FormatError),
}
