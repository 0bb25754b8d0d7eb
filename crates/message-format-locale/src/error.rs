//! Error types for locale data resolution.

use thiserror::Error;

/// The locale service could not produce the requested data.
///
/// These are configuration defects: a malformed locale tag, a style the
/// locale has no rules for, or ICU data that failed to load. They are never
/// retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocaleDataError {
    /// The locale tag is not a valid BCP-47 identifier.
    #[error("invalid locale tag '{tag}'")]
    InvalidLocale { tag: String },

    /// ICU data for the locale could not be loaded.
    #[error("no {what} data for locale '{locale}': {message}")]
    Unavailable {
        locale: String,
        what: &'static str,
        message: String,
    },

    /// The locale has no rules for the requested style.
    #[error("style '{style}' is not supported for locale '{locale}'")]
    UnsupportedStyle { locale: String, style: String },

    /// The value cannot be represented as a decimal (NaN, infinity, overflow).
    #[error("cannot format {value} as a number")]
    InvalidNumber { value: String },
}
