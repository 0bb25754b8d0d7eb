//! Markup tag rendering.
//!
//! A tag bound to a [`crate::TagHandler`] renders as whatever the handler
//! returns. An unbound tag renders back to markup through a default handler
//! reconstructed from the pattern, so `<b>hi</b>` passes through unchanged.

use crate::interpreter::error::FormatError;
use crate::interpreter::formatter::Formatter;
use crate::interpreter::scope::RenderScope;
use crate::types::{Content, TagHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagShape {
    Paired,
    SelfClosing,
}

/// A synthesized handler reproducing the original markup.
#[derive(Debug, Clone)]
pub(crate) struct DefaultTag {
    id: String,
    attributes: String,
    shape: TagShape,
}

impl DefaultTag {
    pub(crate) fn new(id: &str, attributes: &str, shape: TagShape) -> Self {
        Self {
            id: id.to_string(),
            attributes: attributes.to_string(),
            shape,
        }
    }

    fn open(&self) -> String {
        if self.attributes.is_empty() {
            format!("<{}", self.id)
        } else {
            format!("<{} {}", self.id, self.attributes)
        }
    }

    pub(crate) fn render(&self, content: Option<Content>) -> Content {
        match self.shape {
            TagShape::SelfClosing => Content::Text(format!("{} />", self.open())),
            TagShape::Paired => Content::concat(vec![
                Content::Text(format!("{}>", self.open())),
                content.unwrap_or_default(),
                Content::Text(format!("</{}>", self.id)),
            ]),
        }
    }
}

/// How a tag renders in the current call.
enum TagRenderer {
    Bound(TagHandler),
    Default(DefaultTag),
}

/// A compiled paired or self-closing tag.
#[derive(Debug)]
pub(crate) struct TagFormatter {
    id: String,
    attributes: String,
    /// Compiled children; `None` for self-closing tags.
    children: Option<Box<Formatter>>,
}

impl TagFormatter {
    pub(crate) fn paired(id: &str, attributes: &str, children: Formatter) -> Self {
        Self {
            id: id.to_string(),
            attributes: attributes.to_string(),
            children: Some(Box::new(children)),
        }
    }

    pub(crate) fn self_closing(id: &str, attributes: &str) -> Self {
        Self {
            id: id.to_string(),
            attributes: attributes.to_string(),
            children: None,
        }
    }

    fn shape(&self) -> TagShape {
        if self.children.is_some() {
            TagShape::Paired
        } else {
            TagShape::SelfClosing
        }
    }

    /// Render the tag.
    ///
    /// The default handler is resolved before the children render, so a
    /// nested tag with the same id reuses the outer tag's default.
    pub(crate) fn render(&self, scope: &mut RenderScope<'_>) -> Result<Content, FormatError> {
        let renderer = match scope.tag_binding(&self.id) {
            Some(value) => TagRenderer::Bound(
                value
                    .as_handler()
                    .cloned()
                    .ok_or_else(|| FormatError::invalid_argument(&self.id, "a tag handler"))?,
            ),
            None => TagRenderer::Default(scope.default_tag(&self.id, &self.attributes, self.shape())),
        };
        let content = match &self.children {
            Some(children) => Some(children.render_in(scope)?),
            None => None,
        };
        Ok(match renderer {
            TagRenderer::Bound(handler) => handler.call(content),
            TagRenderer::Default(default) => default.render(content),
        })
    }
}
