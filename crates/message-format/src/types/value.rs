use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use message_format_locale::Numeric;

use super::TagHandler;

/// Arguments for one `format` call, keyed by placeholder id.
pub type Args = HashMap<String, Value>;

/// A runtime value that can be passed as a message argument.
///
/// # Example
///
/// ```
/// use message_format::{TagHandler, Value};
///
/// // Numbers become Value::Number
/// let count: Value = 42.into();
///
/// // Strings become Value::String
/// let name: Value = "Alice".into();
///
/// // Tag handlers receive the rendered tag content
/// let bold: Value = TagHandler::wrap(|content| format!("<b>{content}</b>").into()).into();
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A point in time, rendered by `date` and `time` placeholders.
    DateTime(DateTime<FixedOffset>),

    /// A handler for a markup tag with the same id.
    Handler(TagHandler),
}

impl Value {
    /// Get this value as a number.
    ///
    /// Strings that parse as numbers count as numbers.
    pub fn as_number(&self) -> Option<Numeric> {
        match self {
            Value::Number(n) => Some(Numeric::Integer(*n)),
            Value::Float(f) => Some(Numeric::Float(*f)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .map(Numeric::Integer)
                    .or_else(|_| s.parse::<f64>().map(Numeric::Float))
                    .ok()
            }
            Value::DateTime(_) | Value::Handler(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a date-time, if it is one.
    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Get this value as a tag handler, if it is one.
    pub fn as_handler(&self) -> Option<&TagHandler> {
        match self {
            Value::Handler(h) => Some(h),
            _ => None,
        }
    }

    /// Plain-text form used by simple placeholders and select keys.
    ///
    /// Handlers have no text form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Number(n) => Some(n.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::DateTime(dt) => Some(dt.to_rfc3339()),
            Value::Handler(_) => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::Handler(_) => write!(f, "<handler>"),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt.fixed_offset())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt.and_utc().fixed_offset())
    }
}

impl From<TagHandler> for Value {
    fn from(h: TagHandler) -> Self {
        Value::Handler(h)
    }
}
