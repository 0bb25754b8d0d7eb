//! Message compilation and formatting.
//!
//! A node tree compiles once into a [`Formatter`]; rendering it against
//! arguments produces output plus the ids of any arguments that were absent.
//! [`MessageFormat`] wraps both steps with a locale and a missing-argument
//! policy.

mod compiler;
mod error;
mod escape;
mod formatter;
mod message;
mod scope;
mod selector;
mod tags;

pub use compiler::compile;
pub use error::{CompileError, FormatError, MessageError};
pub use formatter::{Formatter, Rendering};
pub use message::{MessageFormat, format_message};
pub use scope::MissingIds;
