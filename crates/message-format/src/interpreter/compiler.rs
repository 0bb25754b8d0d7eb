//! Compile message trees into formatters.

use message_format_locale::NumberStyle;

use crate::interpreter::error::CompileError;
use crate::interpreter::formatter::Formatter;
use crate::interpreter::selector::{PluralSelector, SelectSelector};
use crate::interpreter::tags::TagFormatter;
use crate::tree::Node;

/// The innermost enclosing plural, which `#` refers to.
#[derive(Debug, Clone)]
pub(crate) struct PluralContext {
    pub(crate) id: String,
    pub(crate) offset: i64,
}

/// Compile a top-level node sequence.
///
/// A sequence of one node compiles to that node's formatter directly.
///
/// # Example
///
/// ```
/// use message_format::interpreter::compile;
/// use message_format::{IcuLocaleService, Node, args};
///
/// let formatter = compile(&[Node::literal("Hi "), Node::simple("name")]).unwrap();
/// let service = IcuLocaleService::try_new("en").unwrap();
/// let rendering = formatter.render(&args! { "name" => "Ann" }, &service).unwrap();
/// assert_eq!(rendering.content.to_string(), "Hi Ann");
/// ```
pub fn compile(nodes: &[Node]) -> Result<Formatter, CompileError> {
    compile_sequence(nodes, None)
}

pub(crate) fn compile_sequence(
    nodes: &[Node],
    parent: Option<&PluralContext>,
) -> Result<Formatter, CompileError> {
    let mut compiled = nodes
        .iter()
        .map(|node| compile_node(node, parent))
        .collect::<Result<Vec<_>, _>>()?;
    if compiled.len() == 1
        && let Some(only) = compiled.pop()
    {
        return Ok(only);
    }
    Ok(Formatter::sequence(compiled))
}

fn compile_node(node: &Node, parent: Option<&PluralContext>) -> Result<Formatter, CompileError> {
    match node {
        Node::Literal(text) => Ok(Formatter::literal(text.clone())),
        Node::Simple(id) => Ok(Formatter::simple(id.clone())),
        Node::Number { id, offset, style } => Ok(Formatter::number(id.clone(), *offset, *style)),
        Node::DateTime { id, kind, style } => {
            Ok(Formatter::date_time(id.clone(), *kind, style.clone()))
        }
        Node::Hash => {
            let parent = parent.ok_or(CompileError::HashOutsidePlural)?;
            Ok(Formatter::number(
                parent.id.clone(),
                parent.offset,
                NumberStyle::Default,
            ))
        }
        Node::Plural {
            id,
            kind,
            offset,
            branches,
        } => Ok(Formatter::plural(PluralSelector::compile(
            id, *kind, *offset, branches,
        )?)),
        Node::Select { id, branches } => Ok(Formatter::select(SelectSelector::compile(
            id, branches, parent,
        )?)),
        Node::Tag {
            id,
            attributes,
            children,
        } => Ok(Formatter::tag(TagFormatter::paired(
            id,
            attributes,
            compile_sequence(children, parent)?,
        ))),
        Node::SelfClosingTag { id, attributes } => {
            Ok(Formatter::tag(TagFormatter::self_closing(id, attributes)))
        }
    }
}
