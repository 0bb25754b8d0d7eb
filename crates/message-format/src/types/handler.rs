use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use super::Content;

type HandlerFn = dyn Fn(Option<Content>) -> Content + Send + Sync;

/// A caller-supplied renderer for a markup tag.
///
/// Paired tags (`<b>...</b>`) call the handler with `Some(content)`, where
/// content is the already-rendered children. Self-closing tags (`<br />`)
/// call it with `None`. The handler's return value is inserted verbatim and
/// is never HTML-escaped.
#[derive(Clone)]
pub struct TagHandler(Arc<HandlerFn>);

impl TagHandler {
    /// Create a handler that sees whether content was supplied.
    pub fn new(f: impl Fn(Option<Content>) -> Content + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Create a handler for paired tags. Self-closing use passes empty content.
    pub fn wrap(f: impl Fn(Content) -> Content + Send + Sync + 'static) -> Self {
        Self::new(move |content| f(content.unwrap_or_default()))
    }

    /// Create a handler that ignores content and always renders `f()`.
    pub fn replace(f: impl Fn() -> Content + Send + Sync + 'static) -> Self {
        Self::new(move |_| f())
    }

    /// Invoke the handler.
    pub fn call(&self, content: Option<Content>) -> Content {
        (self.0)(content)
    }
}

impl Debug for TagHandler {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("TagHandler(..)")
    }
}
