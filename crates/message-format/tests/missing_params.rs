//! Integration tests for missing-argument tracking and strict mode.

use message_format::{
    FormatError, IcuLocaleService, MessageFormat, Node, NumberStyle, args, compile,
};

fn message(pattern: Vec<Node>, strict: bool) -> MessageFormat {
    MessageFormat::builder()
        .pattern(pattern)
        .locale("en")
        .raise_on_missing_params(strict)
        .build()
        .unwrap()
}

fn greeting() -> Vec<Node> {
    vec![
        Node::literal("Hello "),
        Node::simple("first"),
        Node::literal(" "),
        Node::simple("last"),
        Node::literal("!"),
    ]
}

#[test]
fn missing_simple_renders_empty_by_default() {
    let message = message(greeting(), false);
    assert_eq!(
        message.format(&args! { "first" => "Ada" }).unwrap(),
        "Hello Ada !"
    );
}

#[test]
fn strict_mode_reports_missing_params() {
    let message = message(greeting(), true);
    let err = message.format(&args! { "first" => "Ada" }).unwrap_err();
    assert!(matches!(
        &err,
        FormatError::MissingParameters { missing_params } if missing_params == &["last"]
    ));
    insta::assert_snapshot!(err.to_string(), @"missing parameters: last");
}

#[test]
fn strict_mode_passes_when_everything_is_supplied() {
    let message = message(greeting(), true);
    assert_eq!(
        message
            .format(&args! { "first" => "Ada", "last" => "Lovelace" })
            .unwrap(),
        "Hello Ada Lovelace!"
    );
}

#[test]
fn missing_params_are_deduplicated_in_reference_order() {
    let message = message(
        vec![
            Node::simple("b"),
            Node::simple("a"),
            Node::number("b", NumberStyle::Default),
            Node::simple("c"),
        ],
        true,
    );
    let err = message.format(&args! {}).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"missing parameters: b, a, c");
}

#[test]
fn rendering_keeps_every_occurrence() {
    let formatter = compile(&[
        Node::literal("I have "),
        Node::plural(
            "count",
            0,
            [
                ("one", vec![Node::literal("one")]),
                ("other", vec![Node::Hash, Node::literal(" items")]),
            ],
        ),
    ])
    .unwrap();
    let service = IcuLocaleService::try_new("en").unwrap();
    let rendering = formatter.render(&args! {}, &service).unwrap();
    assert_eq!(rendering.content.to_string(), "I have  items");
    assert_eq!(rendering.missing.as_slice(), ["count", "count"]);
    assert_eq!(rendering.missing.deduplicated(), vec!["count"]);
}

#[test]
fn unselected_branches_are_not_checked() {
    let message = message(
        vec![Node::select(
            "g",
            [
                ("male", vec![Node::simple("him")]),
                ("other", vec![Node::literal("them")]),
            ],
        )],
        true,
    );
    assert_eq!(message.format(&args! { "g" => "female" }).unwrap(), "them");
    let err = message.format(&args! { "g" => "male" }).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"missing parameters: him");
}

#[test]
fn missing_select_value_is_reported_in_strict_mode() {
    let message = message(
        vec![Node::select("g", [("other", vec![Node::literal("x")])])],
        true,
    );
    assert!(matches!(
        message.format(&args! {}),
        Err(FormatError::MissingParameters { missing_params }) if missing_params == ["g"]
    ));
}

#[test]
fn missing_tracking_is_per_call() {
    let message = message(greeting(), true);
    assert!(message.format(&args! {}).is_err());
    assert_eq!(
        message.format(&args! { "first" => "A", "last" => "B" }).unwrap(),
        "Hello A B!"
    );
}
