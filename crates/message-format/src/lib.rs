pub mod interpreter;
pub mod tree;
pub mod types;

pub use interpreter::{
    CompileError, FormatError, Formatter, MessageError, MessageFormat, MissingIds, Rendering,
    compile, format_message,
};
pub use tree::{Branches, Node, TreeError};
pub use types::{Args, Content, TagHandler, Value};

pub use message_format_locale::{
    DateTimeKind, DateTimeStyle, IcuLocaleService, LocaleDataError, LocaleService, NumberStyle,
    Numeric, PluralCategory, PluralKind,
};

/// Creates an [`Args`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings,
/// date-times and [`TagHandler`]s can be passed directly.
///
/// # Example
///
/// ```
/// use message_format::{Numeric, args};
///
/// let a = args! { "count" => 3, "name" => "Alice" };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a["count"].as_number(), Some(Numeric::Integer(3)));
/// assert_eq!(a["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
