use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rendered message output.
///
/// Most messages render to plain text. Tag handlers may return structured
/// content (a list of parts), which is carried through unchanged so callers
/// embedding components can inspect it; displaying always flattens by
/// concatenation.
///
/// # Example
///
/// ```
/// use message_format::Content;
///
/// let content = Content::from(vec![Content::from("<b>"), Content::from("hi"), Content::from("</b>")]);
/// assert_eq!(content.to_string(), "<b>hi</b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text.
    Text(String),
    /// Structured content produced by a tag handler.
    Parts(Vec<Content>),
}

impl Content {
    /// Empty text.
    pub fn empty() -> Content {
        Content::Text(String::new())
    }

    /// Joins rendered pieces in order.
    ///
    /// Text pieces are concatenated into a single text; if any piece is
    /// structured the pieces are kept side by side as parts.
    pub fn concat(pieces: Vec<Content>) -> Content {
        if pieces.iter().all(|piece| matches!(piece, Content::Text(_))) {
            let mut text = String::new();
            for piece in &pieces {
                if let Content::Text(s) = piece {
                    text.push_str(s);
                }
            }
            return Content::Text(text);
        }
        Content::Parts(pieces)
    }

    /// Get the content as text, if it is unstructured.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            Content::Parts(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(s) => s.is_empty(),
            Content::Parts(parts) => parts.iter().all(Content::is_empty),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::empty()
    }
}

impl Display for Content {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Content::Text(s) => f.write_str(s),
            Content::Parts(parts) => parts.iter().try_for_each(|part| write!(f, "{part}")),
        }
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<Vec<Content>> for Content {
    fn from(parts: Vec<Content>) -> Self {
        Content::Parts(parts)
    }
}

impl From<Content> for String {
    fn from(content: Content) -> Self {
        match content {
            Content::Text(s) => s,
            parts @ Content::Parts(_) => parts.to_string(),
        }
    }
}
