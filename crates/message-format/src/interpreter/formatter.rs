//! Compiled formatter trees and their rendering.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset};
use message_format_locale::{DateTimeKind, DateTimeStyle, LocaleService, NumberStyle};

use crate::interpreter::error::FormatError;
use crate::interpreter::escape::escape_html;
use crate::interpreter::scope::{MissingIds, RenderScope};
use crate::interpreter::selector::{PluralSelector, SelectSelector};
use crate::interpreter::tags::TagFormatter;
use crate::types::{Args, Content, Value};

/// A compiled message pattern, ready to render against arguments.
///
/// Built once by [`crate::interpreter::compile`]; rendering never mutates
/// it, so one formatter can serve many calls concurrently.
#[derive(Debug)]
pub struct Formatter(Kind);

#[derive(Debug)]
enum Kind {
    Literal(String),
    Sequence(Vec<Formatter>),
    Simple(String),
    Number {
        id: String,
        offset: i64,
        style: NumberStyle,
    },
    DateTime {
        id: String,
        kind: DateTimeKind,
        style: DateTimeStyle,
    },
    Plural(PluralSelector),
    Select(SelectSelector),
    Tag(TagFormatter),
}

/// The result of rendering a formatter once.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    /// Rendered output.
    pub content: Content,
    /// Ids referenced but not supplied, in evaluation order.
    pub missing: MissingIds,
}

impl Formatter {
    pub(crate) fn literal(text: String) -> Self {
        Self(Kind::Literal(text))
    }

    pub(crate) fn sequence(children: Vec<Formatter>) -> Self {
        Self(Kind::Sequence(children))
    }

    pub(crate) fn simple(id: String) -> Self {
        Self(Kind::Simple(id))
    }

    pub(crate) fn number(id: String, offset: i64, style: NumberStyle) -> Self {
        Self(Kind::Number { id, offset, style })
    }

    pub(crate) fn date_time(id: String, kind: DateTimeKind, style: DateTimeStyle) -> Self {
        Self(Kind::DateTime { id, kind, style })
    }

    pub(crate) fn plural(selector: PluralSelector) -> Self {
        Self(Kind::Plural(selector))
    }

    pub(crate) fn select(selector: SelectSelector) -> Self {
        Self(Kind::Select(selector))
    }

    pub(crate) fn tag(tag: TagFormatter) -> Self {
        Self(Kind::Tag(tag))
    }

    /// Render against `args`, collecting the ids of absent arguments.
    ///
    /// Missing arguments never fail a render on their own; whether they
    /// should is the caller's policy.
    pub fn render(&self, args: &Args, service: &dyn LocaleService) -> Result<Rendering, FormatError> {
        let mut scope = RenderScope::new(args, service);
        let content = self.render_in(&mut scope)?;
        Ok(Rendering {
            content,
            missing: scope.finish(),
        })
    }

    pub(crate) fn render_in(&self, scope: &mut RenderScope<'_>) -> Result<Content, FormatError> {
        match &self.0 {
            Kind::Literal(text) => Ok(Content::Text(text.clone())),
            Kind::Sequence(children) => {
                let mut parts = Vec::with_capacity(children.len());
                for child in children {
                    parts.push(child.render_in(scope)?);
                }
                Ok(Content::concat(parts))
            }
            Kind::Simple(id) => render_simple(id, scope),
            Kind::Number { id, offset, style } => render_number(id, *offset, *style, scope),
            Kind::DateTime { id, kind, style } => render_date_time(id, *kind, style, scope),
            Kind::Plural(selector) => selector.render(scope),
            Kind::Select(selector) => selector.render(scope),
            Kind::Tag(tag) => tag.render(scope),
        }
    }
}

fn render_simple(id: &str, scope: &mut RenderScope<'_>) -> Result<Content, FormatError> {
    let Some(value) = scope.argument(id) else {
        return Ok(Content::empty());
    };
    let text = value
        .to_text()
        .ok_or_else(|| FormatError::invalid_argument(id, "a text, number or date value"))?;
    Ok(Content::Text(escape_html(&text)))
}

fn render_number(
    id: &str,
    offset: i64,
    style: NumberStyle,
    scope: &mut RenderScope<'_>,
) -> Result<Content, FormatError> {
    let Some(value) = scope.argument(id) else {
        return Ok(Content::empty());
    };
    let number = value
        .as_number()
        .ok_or_else(|| FormatError::invalid_argument(id, "a number"))?;
    let text = scope.service().render_number(number.minus(offset), style)?;
    Ok(Content::Text(text))
}

fn render_date_time(
    id: &str,
    kind: DateTimeKind,
    style: &DateTimeStyle,
    scope: &mut RenderScope<'_>,
) -> Result<Content, FormatError> {
    let Some(value) = scope.argument(id) else {
        return Ok(Content::empty());
    };
    let date_time = date_time_value(value)
        .ok_or_else(|| FormatError::invalid_argument(id, "a date-time or RFC 3339 string"))?;
    let text = scope.service().render_date_time(&date_time, kind, style)?;
    Ok(Content::Text(text))
}

fn date_time_value(value: &Value) -> Option<Cow<'_, DateTime<FixedOffset>>> {
    value.as_date_time().map(Cow::Borrowed).or_else(|| {
        value
            .as_string()
            .and_then(|text| DateTime::parse_from_rfc3339(text.trim()).ok())
            .map(Cow::Owned)
    })
}
