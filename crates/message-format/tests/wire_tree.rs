//! Integration tests for decoding the parser's JSON output.

use message_format::tree::{decode, decode_value};
use message_format::{
    CompileError, DateTimeKind, DateTimeStyle, MessageFormat, Node, NumberStyle, TreeError, args,
};

#[test]
fn decodes_literals_and_simple_arguments() {
    let nodes = decode(r#"["Hello, ", ["name"], "!"]"#).unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::literal("Hello, "),
            Node::simple("name"),
            Node::literal("!"),
        ]
    );
}

#[test]
fn decodes_number_and_date_styles() {
    let nodes = decode(
        r#"[["n", "number", "percent"], ["m", "number"], ["s", "spellout"], ["d", "date", "short"], ["t", "time"], ["x", "date", "%Y"]]"#,
    )
    .unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::number("n", NumberStyle::Percent),
            Node::number("m", NumberStyle::Default),
            Node::number("s", NumberStyle::Spellout),
            Node::date_time("d", DateTimeKind::Date, DateTimeStyle::Short),
            Node::date_time("t", DateTimeKind::Time, DateTimeStyle::Medium),
            Node::date_time("x", DateTimeKind::Date, DateTimeStyle::Named("%Y".to_string())),
        ]
    );
}

#[test]
fn unknown_number_style_falls_back_to_default() {
    let nodes = decode(r#"[["n", "number", "scientific"]]"#).unwrap();
    assert_eq!(nodes, vec![Node::number("n", NumberStyle::Default)]);
}

#[test]
fn decodes_plural_with_offset_and_hash() {
    let nodes = decode(
        r##"[["n", "plural", 1, {"=0": ["none"], "other": [["#"], " more"]}]]"##,
    )
    .unwrap();
    assert_eq!(
        nodes,
        vec![Node::plural(
            "n",
            1,
            [
                ("=0", vec![Node::literal("none")]),
                ("other", vec![Node::Hash, Node::literal(" more")]),
            ],
        )]
    );
}

#[test]
fn decodes_selectordinal_and_select() {
    let nodes = decode(
        r##"[["p", "selectordinal", 0, {"one": [["#"], "st"], "other": [["#"], "th"]}], ["g", "select", {"male": ["he"], "other": ["they"]}]]"##,
    )
    .unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::select_ordinal(
                "p",
                [
                    ("one", vec![Node::Hash, Node::literal("st")]),
                    ("other", vec![Node::Hash, Node::literal("th")]),
                ],
            ),
            Node::select(
                "g",
                [
                    ("male", vec![Node::literal("he")]),
                    ("other", vec![Node::literal("they")]),
                ],
            ),
        ]
    );
}

#[test]
fn decodes_tags() {
    let nodes = decode(
        r#"[["a", "tag", [" href=\"/x\" ", ["go ", ["where"]]]], ["br", "self-closing-tag", [null]]]"#,
    )
    .unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::tag(
                "a",
                r#"href="/x""#,
                vec![Node::literal("go "), Node::simple("where")],
            ),
            Node::self_closing_tag("br", ""),
        ]
    );
}

#[test]
fn decode_value_accepts_parsed_json() {
    let value = serde_json::json!(["a", ["b"]]);
    assert_eq!(
        decode_value(&value).unwrap(),
        vec![Node::literal("a"), Node::simple("b")]
    );
}

#[test]
fn unknown_argument_type_is_rejected() {
    let err = decode(r#"[["n", "currency-ish"]]"#).unwrap_err();
    assert!(matches!(
        &err,
        TreeError::UnknownType { id, kind } if id == "n" && kind == "currency-ish"
    ));
    insta::assert_snapshot!(err.to_string(), @"unknown argument type 'currency-ish' for 'n'");
}

#[test]
fn malformed_elements_are_rejected() {
    assert!(matches!(
        decode(r#"[["g", "select", ["not", "an", "object"]]]"#),
        Err(TreeError::Malformed { .. })
    ));
    assert!(matches!(
        decode(r#"[[42]]"#),
        Err(TreeError::Malformed { .. })
    ));
    assert!(matches!(decode(r#"{"not": "an array"}"#), Err(TreeError::Json(_))));
}

#[test]
fn from_json_compiles_and_formats() {
    let message = MessageFormat::from_json(
        r##"["I have ", ["count", "plural", 0, {"=0": ["no bananas"], "one": ["a banana"], "other": [["#"], " bananas"]}], "."]"##,
        "en-US",
    )
    .unwrap();
    assert_eq!(
        message.format(&args! { "count" => 0 }).unwrap(),
        "I have no bananas."
    );
    assert_eq!(
        message.format(&args! { "count" => 1234 }).unwrap(),
        "I have 1,234 bananas."
    );
}

#[test]
fn from_json_reports_tree_errors() {
    let result = MessageFormat::from_json("not json", "en");
    assert!(matches!(result, Err(CompileError::Tree(TreeError::Json(_)))));
}
