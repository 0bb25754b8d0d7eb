mod content;
mod handler;
mod value;

pub use content::Content;
pub use handler::TagHandler;
pub use value::{Args, Value};
