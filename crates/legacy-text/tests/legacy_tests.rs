//! Tests for legacy codes, hex colors, escapes and parser options.

use insta::assert_snapshot;
use legacy_text::{named, LegacyText, TextNode};

fn tree(input: &str) -> String {
    LegacyText::get().parse(input).to_string()
}

fn resetting() -> LegacyText {
    LegacyText::builder().color_resets(true).build().unwrap()
}

// ============================================================================
// Basic Parsing
// ============================================================================

#[test]
fn parse_plain_text() {
    assert_eq!(LegacyText::get().parse("Hello World"), TextNode::text("Hello World"));
}

#[test]
fn parse_empty_string() {
    assert!(LegacyText::get().parse("").is_empty());
}

#[test]
fn parse_color_code() {
    assert_snapshot!(tree("&cred"), @r#"{"red" #ff5555}"#);
    assert_snapshot!(tree("&Cred"), @r#"{"red" #ff5555}"#);
}

#[test]
fn unknown_code_is_literal() {
    assert_snapshot!(tree("&gnot a code"), @r#"{"&gnot a code"}"#);
    assert_snapshot!(tree("a&"), @r#"{"a&"}"#);
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn decoration_then_color_share_a_node() {
    assert_snapshot!(tree("&l&cjust red"), @r#"{"just red" #ff5555 bold}"#);
}

#[test]
fn later_codes_nest() {
    assert_snapshot!(tree("&bAqua &lbold"), @r#"{"Aqua " #55ffff [{"bold" bold}]}"#);
    assert_snapshot!(
        tree("&aone &btwo"),
        @r#"{"one " #55ff55 [{"two" #55ffff}]}"#
    );
}

#[test]
fn reset_starts_a_sibling() {
    assert_snapshot!(
        tree("&c&lbold red &rblank"),
        @r#"{"" [{"bold red " #ff5555 bold}, {"blank"}]}"#
    );
}

#[test]
fn reset_clears_events() {
    assert_snapshot!(
        tree("[click:run_command:/a]a&rb"),
        @r#"{"" [{"a" click=run_command:"/a"}, {"b"}]}"#
    );
}

// ============================================================================
// Color Resets
// ============================================================================

#[test]
fn color_resets_flatten() {
    let parser = resetting();
    assert_snapshot!(
        parser.parse("&aone &btwo").to_string(),
        @r#"{"" [{"one " #55ff55}, {"two" #55ffff}]}"#
    );
}

#[test]
fn color_resets_keep_empty_style_node() {
    let parser = resetting();
    assert_snapshot!(
        parser.parse("&l&cjust red").to_string(),
        @r#"{"" [{"" bold}, {"just red" #ff5555}]}"#
    );
}

// ============================================================================
// Hex Colors
// ============================================================================

#[test]
fn hex_color_code() {
    let node = LegacyText::get().parse("&#ff0000red");
    assert_eq!(node, TextNode::text("red").color(legacy_text::Color::rgb(255, 0, 0)));
}

#[test]
fn invalid_hex_is_literal() {
    assert_snapshot!(tree("&#iopnmkwhite"), @r#"{"&#iopnmkwhite"}"#);
    assert_snapshot!(tree("&#ff00"), @r##"{"&#ff00"}"##);
}

#[test]
fn hex_can_be_disabled() {
    let parser = LegacyText::builder().adventure_hex(false).build().unwrap();
    assert_eq!(parser.parse("&#ffffffwhite"), TextNode::text("&#ffffffwhite"));
}

// ============================================================================
// Escapes
// ============================================================================

#[test]
fn escaped_color_char() {
    assert_snapshot!(tree("\\&awhite"), @r#"{"&awhite"}"#);
}

#[test]
fn escaped_brackets() {
    assert_snapshot!(tree("\\[color:red]x \\{&a,&c}"), @r#"{"[color:red]x {" [{"," #55ff55 [{"}" #ff5555}]}]}"#);
}

#[test]
fn trailing_backslash_is_kept() {
    assert_eq!(LegacyText::get().parse("a\\").content, "a\\");
}

#[test]
fn escaped_backslash() {
    assert_eq!(LegacyText::get().parse("a\\\\&cb").plain_text(), "a\\b");
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn legacy_codes_can_be_disabled() {
    let parser = LegacyText::builder().use_legacy(false).build().unwrap();
    assert_eq!(parser.parse("&chi"), TextNode::text("&chi"));
    assert_eq!(parser.parse("[color:red]hi").color, Some(named::RED));
}

#[test]
fn custom_color_character() {
    let parser = LegacyText::builder().color_character('!').build().unwrap();
    assert_eq!(parser.parse("!chi"), TextNode::text("hi").color(named::RED));
    assert_eq!(parser.parse("&chi"), TextNode::text("&chi"));
}
