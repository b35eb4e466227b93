//! Tests for placeholder replacement.

use insta::assert_snapshot;
use legacy_text::{
    named, Decoration, HoverEvent, LegacyText, ParseError, RecursionPolicy, Replacement,
    ReplacementRule, Style, TextNode, MAX_REPLACEMENT_DEPTH,
};

fn build(input: &str, rules: &[(&str, Replacement)]) -> TextNode {
    rules
        .iter()
        .fold(LegacyText::get().build_component(input), |builder, (target, value)| {
            builder.replace(target, value.clone())
        })
        .build()
        .unwrap()
}

fn recursive(input: &str, rules: &[(&str, &str)], policy: RecursionPolicy) -> String {
    rules
        .iter()
        .fold(LegacyText::get().build_component(input), |builder, (target, value)| {
            builder.replace(target, *value)
        })
        .recursion(policy)
        .build()
        .unwrap()
        .plain_text()
}

// ============================================================================
// Sub-tree Replacements
// ============================================================================

#[test]
fn nodes_are_spliced_in_order() {
    let node = build(
        "%a&a: %b",
        &[
            ("%a", TextNode::text("test").into()),
            ("%b", TextNode::text("hello").into()),
        ],
    );
    assert_snapshot!(
        node.to_string(),
        @r#"{"" [{"test"}, {": " #55ff55 [{"hello"}]}]}"#
    );
}

#[test]
fn node_inherits_color() {
    let node = build("&a%a", &[("%a", TextNode::text("test").into())]);
    assert_snapshot!(node.to_string(), @r#"{"" #55ff55 [{"test"}]}"#);
}

#[test]
fn node_inherits_hover() {
    let node = build("[hover:show_text:hi]%a", &[("%a", TextNode::text("test").into())]);
    assert_eq!(
        node,
        TextNode::new()
            .hover(HoverEvent::show_text(TextNode::text("hi")))
            .child(TextNode::text("test"))
    );
}

#[test]
fn builder_replacement() {
    let node = build(
        "a%bc",
        &[("%b", TextNode::builder().content("b").color(named::RED).into())],
    );
    assert_snapshot!(node.to_string(), @r#"{"a" [{"b" #ff5555}, {"c"}]}"#);
}

// ============================================================================
// Style Replacements
// ============================================================================

#[test]
fn color_replacement() {
    let node = build("a %c b", &[("%c", named::RED.into())]);
    assert_snapshot!(node.to_string(), @r#"{"a " [{" b" #ff5555}]}"#);
}

#[test]
fn decoration_replacement() {
    let node = build("x%bY", &[("%b", Decoration::Bold.into())]);
    assert_snapshot!(node.to_string(), @r#"{"x" [{"Y" bold}]}"#);
}

#[test]
fn style_replacement() {
    let style = Style::new().with_color(named::GOLD).decorated(Decoration::Italic);
    let node = build("x%sY", &[("%s", style.into())]);
    assert_snapshot!(node.to_string(), @r#"{"x" [{"Y" #ffaa00 italic}]}"#);
}

#[test]
fn style_replacement_aborts_open_directive() {
    let node = build("[color:%c!", &[("%c", named::RED.into())]);
    assert_snapshot!(node.to_string(), @r#"{"[color:" [{"!" #ff5555}]}"#);
}

#[test]
fn style_replacement_with_color_resets() {
    let parser = LegacyText::builder().color_resets(true).build().unwrap();
    let node = parser
        .build_component("&lbold%cred")
        .replace("%c", named::RED)
        .build()
        .unwrap();
    assert_snapshot!(node.to_string(), @r#"{"" [{"bold" bold}, {"red" #ff5555}]}"#);
}

// ============================================================================
// Literal Replacements
// ============================================================================

#[test]
fn literal_is_parsed_as_markup() {
    let node = build("Hello %p", &[("%p", "&6Steve".into())]);
    assert_snapshot!(node.to_string(), @r#"{"Hello " [{"Steve" #ffaa00}]}"#);
}

#[test]
fn literal_can_complete_a_directive() {
    let node = build("%open%red]text", &[("%open%", "[color:".into())]);
    assert_eq!(node, TextNode::text("text").color(named::RED));
}

#[test]
fn placeholders_inside_hover_text() {
    let node = build("[hover:show_text:%p]x", &[("%p", "&ahi".into())]);
    assert_eq!(
        node.hover,
        Some(HoverEvent::show_text(TextNode::text("hi").color(named::GREEN)))
    );
}

#[test]
fn computed_replacement() {
    let node = LegacyText::get()
        .build_component("hi <bob>")
        .replace_with(r"<(\w+)>", |caps| caps[1].to_uppercase().into())
        .build()
        .unwrap();
    assert_eq!(node, TextNode::text("hi BOB"));
}

#[test]
fn empty_matches_are_ignored() {
    let node = LegacyText::get()
        .build_component("abc")
        .replace_all("x*", "y")
        .build()
        .unwrap();
    assert_eq!(node, TextNode::text("abc"));
}

#[test]
fn first_rule_wins() {
    assert_eq!(
        recursive("bab", &[("ab", "1"), ("b", "2")], RecursionPolicy::default()),
        "21"
    );
}

// ============================================================================
// Recursion
// ============================================================================

#[test]
fn recursion_policies() {
    let rules = [("b", "c"), ("a", "b")];
    assert_eq!(recursive("a", &rules, RecursionPolicy::None), "b");
    assert_eq!(recursive("a", &rules, RecursionPolicy::FollowingOnly), "b");
    assert_eq!(recursive("a", &rules, RecursionPolicy::All), "c");
}

#[test]
fn following_rules_apply() {
    let rules = [("b", "c"), ("a", "b"), ("b", "d")];
    assert_eq!(recursive("a", &rules, RecursionPolicy::None), "b");
    assert_eq!(recursive("a", &rules, RecursionPolicy::FollowingOnly), "d");
    assert_eq!(recursive("a", &rules, RecursionPolicy::All), "c");
}

#[test]
fn runaway_recursion_is_an_error() {
    let result = LegacyText::get()
        .build_component("a")
        .replace("a", "a")
        .recursion(RecursionPolicy::All)
        .build();
    assert_eq!(
        result,
        Err(ParseError::ReplacementDepthExceeded(MAX_REPLACEMENT_DEPTH))
    );
}

#[test]
fn parse_with_rule_slice() {
    let rules = vec![ReplacementRule::literal("%n", "&lN").unwrap()];
    let node = LegacyText::get()
        .parse_with("%n!", &rules, RecursionPolicy::None)
        .unwrap();
    assert_snapshot!(node.to_string(), @r#"{"N!" bold}"#);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn invalid_pattern_fails_build() {
    let result = LegacyText::get()
        .build_component("x")
        .replace_all("[", "y")
        .build();
    assert!(matches!(result, Err(ParseError::InvalidPattern { .. })));
}
