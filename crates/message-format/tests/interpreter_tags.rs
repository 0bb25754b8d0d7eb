//! Integration tests for markup tags and tag handlers.

use std::thread;

use message_format::{Content, FormatError, MessageFormat, Node, TagHandler, Value, args};

fn compile(pattern: Vec<Node>) -> MessageFormat {
    MessageFormat::builder()
        .pattern(pattern)
        .locale("en")
        .build()
        .unwrap()
}

// =============================================================================
// Unbound Tags
// =============================================================================

#[test]
fn unbound_tag_renders_original_markup() {
    let message = compile(vec![
        Node::literal("Click "),
        Node::tag("a", r#"href="/home" class="link""#, vec![Node::literal("here")]),
    ]);
    assert_eq!(
        message.format(&args! {}).unwrap(),
        r#"Click <a href="/home" class="link">here</a>"#
    );
}

#[test]
fn plain_message_content_is_text() {
    let message = compile(vec![Node::literal("no markup "), Node::simple("x")]);
    let content = message.format_content(&args! { "x" => "here" }).unwrap();
    assert_eq!(content.as_text(), Some("no markup here"));
}

#[test]
fn unbound_self_closing_tag() {
    let message = compile(vec![
        Node::literal("line one"),
        Node::self_closing_tag("br", ""),
        Node::literal("line two"),
        Node::self_closing_tag("img", r#"src="x.png""#),
    ]);
    assert_eq!(
        message.format(&args! {}).unwrap(),
        r#"line one<br />line two<img src="x.png" />"#
    );
}

#[test]
fn unbound_tags_are_not_missing_parameters() {
    let message = MessageFormat::builder()
        .pattern(vec![Node::tag("b", "", vec![Node::literal("bold")])])
        .locale("en")
        .raise_on_missing_params(true)
        .build()
        .unwrap();
    assert_eq!(message.format(&args! {}).unwrap(), "<b>bold</b>");
}

#[test]
fn first_tag_with_an_id_defines_the_default() {
    let message = compile(vec![
        Node::tag("a", r#"href="x""#, vec![Node::literal("one")]),
        Node::literal(" and "),
        Node::tag("a", r#"href="y""#, vec![Node::literal("two")]),
    ]);
    assert_eq!(
        message.format(&args! {}).unwrap(),
        r#"<a href="x">one</a> and <a href="x">two</a>"#
    );
}

#[test]
fn outer_tag_defines_the_default_for_nested_tags() {
    let message = compile(vec![Node::tag(
        "span",
        r#"class="outer""#,
        vec![
            Node::literal("a "),
            Node::tag("span", r#"class="inner""#, vec![Node::literal("b")]),
        ],
    )]);
    assert_eq!(
        message.format(&args! {}).unwrap(),
        r#"<span class="outer">a <span class="outer">b</span></span>"#
    );
}

#[test]
fn default_tags_do_not_leak_between_calls() {
    let message = compile(vec![Node::tag("b", "", vec![Node::simple("x")])]);
    let bold = TagHandler::wrap(|content| format!("**{content}**").into());
    assert_eq!(
        message.format(&args! { "x" => "hi", "b" => bold }).unwrap(),
        "**hi**"
    );
    assert_eq!(message.format(&args! { "x" => "hi" }).unwrap(), "<b>hi</b>");
}

#[test]
fn shared_args_render_default_tags_from_many_threads() {
    let message = compile(vec![
        Node::tag("a", r#"href="x""#, vec![Node::simple("first")]),
        Node::self_closing_tag("br", ""),
        Node::tag("a", r#"href="y""#, vec![Node::simple("second")]),
    ]);
    let args = args! { "first" => "one", "second" => "two" };
    let expected = r#"<a href="x">one</a><br /><a href="x">two</a>"#;

    let outputs = thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..50)
                        .map(|_| message.format(&args).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|worker| worker.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert_eq!(outputs.len(), 400);
    assert!(outputs.iter().all(|output| output == expected));
    assert_eq!(args.len(), 2);
    assert!(args.get("a").is_none());
    assert!(args.get("br").is_none());
    assert!(matches!(args.get("first"), Some(Value::String(s)) if s == "one"));
}

// =============================================================================
// Bound Handlers
// =============================================================================

#[test]
fn handler_output_is_not_escaped() {
    let message = compile(vec![Node::tag("b", "", vec![Node::simple("name")])]);
    let strong = TagHandler::wrap(|content| format!("<strong>{content}</strong>").into());
    let output = message
        .format(&args! { "name" => "<Tom & Jerry>", "b" => strong })
        .unwrap();
    assert_eq!(output, "<strong>&lt;Tom &amp; Jerry&gt;</strong>");
}

#[test]
fn self_closing_handler_receives_no_content() {
    let message = compile(vec![Node::self_closing_tag("icon", r#"name="star""#)]);
    let icon = TagHandler::new(|content| match content {
        Some(_) => "with content".into(),
        None => "[star]".into(),
    });
    assert_eq!(message.format(&args! { "icon" => icon }).unwrap(), "[star]");
}

#[test]
fn non_handler_tag_binding_is_rejected() {
    let message = compile(vec![Node::tag("b", "", vec![Node::literal("x")])]);
    let result = message.format(&args! { "b" => "not a handler" });
    assert!(matches!(
        result,
        Err(FormatError::InvalidArgument { id, .. }) if id == "b"
    ));
}

#[test]
fn nested_tags_keep_structured_content() {
    // hello <b>world<i>!</i> <br /> </b>
    let message = compile(vec![
        Node::literal("hello "),
        Node::tag(
            "b",
            "",
            vec![
                Node::literal("world"),
                Node::tag("i", "", vec![Node::literal("!")]),
                Node::literal(" "),
                Node::self_closing_tag("br", ""),
                Node::literal(" "),
            ],
        ),
    ]);
    let italic = TagHandler::wrap(|content| {
        Content::Parts(vec![Content::from("$$$"), content, Content::from("$$$")])
    });
    let args = args! { "i" => italic };

    let content = message.format_content(&args).unwrap();
    assert!(matches!(content, Content::Parts(_)));
    assert_eq!(content.as_text(), None);
    assert_eq!(content.to_string(), "hello <b>world$$$!$$$ <br /> </b>");
    assert_eq!(
        message.format(&args).unwrap(),
        "hello <b>world$$$!$$$ <br /> </b>"
    );
}

#[test]
fn tags_inside_plural_branches() {
    // You have {count, plural, one {<b>#</b> Message} other {<b>#</b> Messages}}
    let message = compile(vec![
        Node::literal("You have "),
        Node::plural(
            "count",
            0,
            [
                (
                    "one",
                    vec![
                        Node::tag("b", "", vec![Node::Hash]),
                        Node::literal(" Message"),
                    ],
                ),
                (
                    "other",
                    vec![
                        Node::tag("b", "", vec![Node::Hash]),
                        Node::literal(" Messages"),
                    ],
                ),
            ],
        ),
    ]);
    let braces = TagHandler::wrap(|content| format!("{{}}{content}{{}}").into());
    assert_eq!(
        message
            .format(&args! { "count" => 1000, "b" => braces.clone() })
            .unwrap(),
        "You have {}1,000{} Messages"
    );
    assert_eq!(
        message.format(&args! { "count" => 1, "b" => braces }).unwrap(),
        "You have {}1{} Message"
    );
    assert_eq!(
        message.format(&args! { "count" => 2 }).unwrap(),
        "You have <b>2</b> Messages"
    );
}

#[test]
fn replace_handler_ignores_content() {
    let message = compile(vec![Node::tag("redacted", "", vec![Node::simple("secret")])]);
    let redact = TagHandler::replace(|| "[hidden]".into());
    assert_eq!(
        message
            .format(&args! { "secret" => "hunter2", "redacted" => redact })
            .unwrap(),
        "[hidden]"
    );
}
