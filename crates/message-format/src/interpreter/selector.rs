//! Plural and select branch selection.

use std::collections::BTreeMap;

use message_format_locale::{LocaleService, Numeric, PluralKind};

use crate::interpreter::compiler::{PluralContext, compile_sequence};
use crate::interpreter::error::{CompileError, FormatError};
use crate::interpreter::formatter::Formatter;
use crate::interpreter::scope::RenderScope;
use crate::tree::Branches;
use crate::types::Content;

const OTHER: &str = "other";

/// A compiled `plural` or `selectordinal` argument.
///
/// Branch precedence is exact match (`=N`, against the raw value), then the
/// plural category of the offset-adjusted value, then `other`.
#[derive(Debug)]
pub(crate) struct PluralSelector {
    id: String,
    kind: PluralKind,
    offset: i64,
    exact: Vec<(f64, Formatter)>,
    keywords: BTreeMap<String, Formatter>,
    other: Box<Formatter>,
}

impl PluralSelector {
    pub(crate) fn compile(
        id: &str,
        kind: PluralKind,
        offset: i64,
        branches: &Branches,
    ) -> Result<Self, CompileError> {
        let context = PluralContext {
            id: id.to_string(),
            offset,
        };
        let mut exact = Vec::new();
        let mut keywords = BTreeMap::new();
        let mut other = None;
        for (key, nodes) in branches {
            let formatter = compile_sequence(nodes, Some(&context))?;
            if key == OTHER {
                other = Some(formatter);
            } else if let Some(number) = key.strip_prefix('=') {
                let number = number.trim().parse::<f64>().map_err(|_| {
                    CompileError::InvalidExactSelector {
                        id: id.to_string(),
                        key: key.clone(),
                    }
                })?;
                exact.push((number, formatter));
            } else {
                keywords.insert(key.clone(), formatter);
            }
        }
        let other = other.ok_or_else(|| CompileError::MissingOtherBranch { id: id.to_string() })?;
        Ok(Self {
            id: id.to_string(),
            kind,
            offset,
            exact,
            keywords,
            other: Box::new(other),
        })
    }

    pub(crate) fn render(&self, scope: &mut RenderScope<'_>) -> Result<Content, FormatError> {
        let branch = match scope.argument(&self.id) {
            None => self.other.as_ref(),
            Some(value) => {
                let number = value
                    .as_number()
                    .ok_or_else(|| FormatError::invalid_argument(&self.id, "a number"))?;
                self.select(number, scope.service())?
            }
        };
        branch.render_in(scope)
    }

    fn select(&self, value: Numeric, service: &dyn LocaleService) -> Result<&Formatter, FormatError> {
        let raw = value.as_f64();
        if let Some((_, formatter)) = self.exact.iter().find(|(number, _)| *number == raw) {
            return Ok(formatter);
        }
        if self.keywords.is_empty() {
            return Ok(self.other.as_ref());
        }
        let category = service.plural_category(value.minus(self.offset), self.kind)?;
        Ok(self
            .keywords
            .get(category.as_str())
            .unwrap_or(self.other.as_ref()))
    }
}

/// A compiled `select` argument. Unmatched or absent values use `other`.
#[derive(Debug)]
pub(crate) struct SelectSelector {
    id: String,
    branches: BTreeMap<String, Formatter>,
    other: Box<Formatter>,
}

impl SelectSelector {
    pub(crate) fn compile(
        id: &str,
        branches: &Branches,
        parent: Option<&PluralContext>,
    ) -> Result<Self, CompileError> {
        let mut compiled = BTreeMap::new();
        for (key, nodes) in branches {
            compiled.insert(key.clone(), compile_sequence(nodes, parent)?);
        }
        let other = compiled
            .remove(OTHER)
            .ok_or_else(|| CompileError::MissingOtherBranch { id: id.to_string() })?;
        Ok(Self {
            id: id.to_string(),
            branches: compiled,
            other: Box::new(other),
        })
    }

    pub(crate) fn render(&self, scope: &mut RenderScope<'_>) -> Result<Content, FormatError> {
        let branch = match scope.argument(&self.id) {
            None => self.other.as_ref(),
            Some(value) => {
                let key = value
                    .to_text()
                    .ok_or_else(|| FormatError::invalid_argument(&self.id, "a text or number value"))?;
                self.branches.get(&key).unwrap_or(self.other.as_ref())
            }
        };
        branch.render_in(scope)
    }
}
