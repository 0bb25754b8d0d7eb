//! Decoding of the parser's JSON wire form into nodes.
//!
//! A message is an array of elements. Each element is either literal text or
//! an argument array `[id, type, ...]`:
//!
//! ```text
//! [ "You have ", [ "numBananas", "plural", 0, {
//!      "=0": [ "no bananas" ],
//!     "one": [ "a banana" ],
//!   "other": [ [ "#" ], " bananas" ]
//! } ], " for sale." ]
//! ```

use serde::Deserialize;
use serde_json::Value as JsonValue;

use message_format_locale::{DateTimeKind, DateTimeStyle, NumberStyle, PluralKind};

use super::error::TreeError;
use super::node::{Branches, Node};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Element {
    Text(String),
    Argument(Vec<JsonValue>),
}

/// Decode a JSON message tree.
///
/// # Example
///
/// ```
/// use message_format::tree::{Node, decode};
///
/// let nodes = decode(r#"["x", ["arg"], "z"]"#).unwrap();
/// assert_eq!(nodes, vec![Node::literal("x"), Node::simple("arg"), Node::literal("z")]);
/// ```
pub fn decode(json: &str) -> Result<Vec<Node>, TreeError> {
    let value: JsonValue = serde_json::from_str(json)?;
    decode_value(&value)
}

/// Decode an already-parsed JSON message tree.
pub fn decode_value(value: &JsonValue) -> Result<Vec<Node>, TreeError> {
    let elements = Vec::<Element>::deserialize(value)?;
    elements
        .into_iter()
        .map(|element| match element {
            Element::Text(text) => Ok(Node::Literal(text)),
            Element::Argument(parts) => decode_argument(&parts),
        })
        .collect()
}

fn malformed(id: &str, kind: &str, message: impl Into<String>) -> TreeError {
    TreeError::Malformed {
        id: id.to_string(),
        kind: kind.to_string(),
        message: message.into(),
    }
}

fn decode_argument(parts: &[JsonValue]) -> Result<Node, TreeError> {
    let Some(JsonValue::String(id)) = parts.first() else {
        return Err(malformed("", "argument", "first entry must be the argument id"));
    };
    if id == "#" {
        return Ok(Node::Hash);
    }
    let kind = match parts.get(1) {
        None | Some(JsonValue::Null) => return Ok(Node::simple(id.as_str())),
        Some(JsonValue::String(kind)) => kind.as_str(),
        Some(_) => return Err(malformed(id, "argument", "type must be a string")),
    };
    let style = parts.get(2).and_then(JsonValue::as_str);

    if let Some(date_kind) = DateTimeKind::from_keyword(kind) {
        return Ok(Node::date_time(
            id.as_str(),
            date_kind,
            DateTimeStyle::from_keyword(style),
        ));
    }
    if let Some(plural_kind) = PluralKind::from_keyword(kind) {
        let offset = match parts.get(2) {
            None | Some(JsonValue::Null) => 0,
            Some(offset) => offset
                .as_i64()
                .ok_or_else(|| malformed(id, kind, "offset must be an integer"))?,
        };
        return Ok(Node::Plural {
            id: id.clone(),
            kind: plural_kind,
            offset,
            branches: decode_branches(id, kind, parts.get(3))?,
        });
    }

    match kind {
        "number" => Ok(Node::number(id.as_str(), NumberStyle::from_keyword(style))),
        "spellout" | "ordinal" | "duration" => Ok(Node::number(
            id.as_str(),
            NumberStyle::from_keyword(Some(kind)),
        )),
        "select" => Ok(Node::Select {
            id: id.clone(),
            branches: decode_branches(id, kind, parts.get(2))?,
        }),
        "tag" => {
            let body = tag_body(id, kind, parts.get(2))?;
            let children = match body.get(1) {
                None | Some(JsonValue::Null) => Vec::new(),
                Some(children) => decode_value(children)?,
            };
            Ok(Node::tag(id.as_str(), tag_attributes(id, kind, body)?, children))
        }
        "self-closing-tag" => {
            let body = tag_body(id, kind, parts.get(2))?;
            Ok(Node::self_closing_tag(
                id.as_str(),
                tag_attributes(id, kind, body)?,
            ))
        }
        _ => Err(TreeError::UnknownType {
            id: id.clone(),
            kind: kind.to_string(),
        }),
    }
}

fn decode_branches(id: &str, kind: &str, value: Option<&JsonValue>) -> Result<Branches, TreeError> {
    let Some(JsonValue::Object(map)) = value else {
        return Err(malformed(id, kind, "branches must be an object"));
    };
    let mut branches = Branches::new();
    for (key, elements) in map {
        branches.insert(key.trim().to_string(), decode_value(elements)?);
    }
    Ok(branches)
}

fn tag_body<'a>(id: &str, kind: &str, value: Option<&'a JsonValue>) -> Result<&'a [JsonValue], TreeError> {
    match value {
        None | Some(JsonValue::Null) => Ok(Default::default()),
        Some(JsonValue::Array(body)) => Ok(body.as_slice()),
        Some(_) => Err(malformed(id, kind, "expected [attributes, children]")),
    }
}

fn tag_attributes(id: &str, kind: &str, body: &[JsonValue]) -> Result<String, TreeError> {
    match body.first() {
        None | Some(JsonValue::Null) => Ok(String::new()),
        Some(JsonValue::String(attributes)) => Ok(attributes.trim().to_string()),
        Some(_) => Err(malformed(id, kind, "attributes must be a string")),
    }
}
