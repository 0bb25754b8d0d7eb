//! Public node types for parsed message patterns.
//!
//! These types are public so external parsers and tooling can build trees
//! directly.

use std::collections::BTreeMap;

use message_format_locale::{DateTimeKind, DateTimeStyle, NumberStyle, PluralKind};

/// Branches of a plural or select argument, keyed by selector (`=0`, `one`,
/// `male`, `other`, ...).
pub type Branches = BTreeMap<String, Vec<Node>>;

/// One element of a parsed message pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text, already unescaped by the parser.
    Literal(String),
    /// A plain placeholder: `{name}`.
    Simple(String),
    /// A numeric placeholder: `{n, number, integer}`. Spellout, ordinal and
    /// duration arguments use the corresponding [`NumberStyle`].
    Number {
        id: String,
        offset: i64,
        style: NumberStyle,
    },
    /// A temporal placeholder: `{d, date, short}`.
    DateTime {
        id: String,
        kind: DateTimeKind,
        style: DateTimeStyle,
    },
    /// `{n, plural, offset:1 =0 {...} one {...} other {...}}` or
    /// `{n, selectordinal, ...}`.
    Plural {
        id: String,
        kind: PluralKind,
        offset: i64,
        branches: Branches,
    },
    /// `{gender, select, male {...} other {...}}`.
    Select { id: String, branches: Branches },
    /// `<id attributes>children</id>`; attributes are kept as raw text.
    Tag {
        id: String,
        attributes: String,
        children: Vec<Node>,
    },
    /// `<id attributes />`.
    SelfClosingTag { id: String, attributes: String },
    /// `#` inside a plural branch.
    Hash,
}

impl Node {
    pub fn literal(text: impl Into<String>) -> Node {
        Node::Literal(text.into())
    }

    pub fn simple(id: impl Into<String>) -> Node {
        Node::Simple(id.into())
    }

    /// A number placeholder with no offset.
    pub fn number(id: impl Into<String>, style: NumberStyle) -> Node {
        Node::Number {
            id: id.into(),
            offset: 0,
            style,
        }
    }

    pub fn date_time(id: impl Into<String>, kind: DateTimeKind, style: DateTimeStyle) -> Node {
        Node::DateTime {
            id: id.into(),
            kind,
            style,
        }
    }

    /// A cardinal plural.
    pub fn plural<K: Into<String>>(
        id: impl Into<String>,
        offset: i64,
        branches: impl IntoIterator<Item = (K, Vec<Node>)>,
    ) -> Node {
        Node::Plural {
            id: id.into(),
            kind: PluralKind::Cardinal,
            offset,
            branches: collect_branches(branches),
        }
    }

    /// An ordinal plural (`selectordinal`).
    pub fn select_ordinal<K: Into<String>>(
        id: impl Into<String>,
        branches: impl IntoIterator<Item = (K, Vec<Node>)>,
    ) -> Node {
        Node::Plural {
            id: id.into(),
            kind: PluralKind::Ordinal,
            offset: 0,
            branches: collect_branches(branches),
        }
    }

    pub fn select<K: Into<String>>(
        id: impl Into<String>,
        branches: impl IntoIterator<Item = (K, Vec<Node>)>,
    ) -> Node {
        Node::Select {
            id: id.into(),
            branches: collect_branches(branches),
        }
    }

    pub fn tag(id: impl Into<String>, attributes: impl Into<String>, children: Vec<Node>) -> Node {
        Node::Tag {
            id: id.into(),
            attributes: attributes.into(),
            children,
        }
    }

    pub fn self_closing_tag(id: impl Into<String>, attributes: impl Into<String>) -> Node {
        Node::SelfClosingTag {
            id: id.into(),
            attributes: attributes.into(),
        }
    }

    /// Number of nodes in this subtree, counting this one.
    pub fn size(&self) -> usize {
        let children: usize = match self {
            Node::Plural { branches, .. } | Node::Select { branches, .. } => {
                branches.values().flatten().map(Node::size).sum()
            }
            Node::Tag { children, .. } => children.iter().map(Node::size).sum(),
            Node::Literal(_)
            | Node::Simple(_)
            | Node::Number { .. }
            | Node::DateTime { .. }
            | Node::SelfClosingTag { .. }
            | Node::Hash => 0,
        };
        children + 1
    }
}

fn collect_branches<K: Into<String>>(branches: impl IntoIterator<Item = (K, Vec<Node>)>) -> Branches {
    branches
        .into_iter()
        .map(|(key, nodes)| (key.into(), nodes))
        .collect()
}
