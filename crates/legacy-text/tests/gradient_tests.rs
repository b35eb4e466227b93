//! Tests for `{...}` gradients.

use insta::assert_snapshot;
use legacy_text::{named, Color, Decoration, LegacyText};

fn tree(input: &str) -> String {
    LegacyText::get().parse(input).to_string()
}

// ============================================================================
// Stops
// ============================================================================

#[test]
fn legacy_stops() {
    assert_snapshot!(tree("{&a,&c}12"), @r#"{"" [{"1" #55ff55}, {"2" #ff5555}]}"#);
}

#[test]
fn hex_stops() {
    assert_snapshot!(
        tree("{&#0000ff,&#ff0000}12"),
        @r#"{"" [{"1" #0000ff}, {"2" #ff0000}]}"#
    );
}

#[test]
fn bracket_stops() {
    assert_snapshot!(
        tree("{[#0000ff],[#ff0000]}12"),
        @r#"{"" [{"1" #0000ff}, {"2" #ff0000}]}"#
    );
    assert_snapshot!(
        tree("{[color:blue],[css:red]}12"),
        @r#"{"" [{"1" #5555ff}, {"2" #ff0000}]}"#
    );
}

#[test]
fn interpolates_between_stops() {
    assert_snapshot!(
        tree("{&#0000ff,&#ff0000}abc"),
        @r#"{"" [{"a" #0000ff}, {"b" #7f007f}, {"c" #ff0000}]}"#
    );
}

#[test]
fn three_stops() {
    let node = LegacyText::get().parse("{[#ff0000],[#00ff00],[#0000ff]}abcde");
    let colors: Vec<_> = node.children.iter().filter_map(|c| c.color).collect();
    assert_eq!(
        colors,
        vec![
            Color::rgb(255, 0, 0),
            Color::rgb(127, 127, 0),
            Color::rgb(0, 255, 0),
            Color::rgb(0, 127, 127),
            Color::rgb(0, 0, 255),
        ]
    );
}

// ============================================================================
// Runs
// ============================================================================

#[test]
fn gradient_nests_after_text() {
    let node = LegacyText::get().parse("a{&a,&c}bc");
    assert_eq!(node.content, "a");
    assert_eq!(node.children.len(), 1);
    assert_eq!(node.children[0].plain_text(), "bc");
    assert_eq!(node.children[0].children.len(), 2);
}

#[test]
fn gradient_covers_one_run() {
    assert_snapshot!(
        tree("{&a,&c}ab[bold]cd"),
        @r#"{"" [{"a" #55ff55}, {"b" #ff5555}, {"cd" bold}]}"#
    );
}

#[test]
fn color_cancels_gradient() {
    assert_snapshot!(tree("{&a,&c}&bab"), @r#"{"ab" #55ffff}"#);
}

#[test]
fn splits_on_graphemes() {
    let node = LegacyText::get().parse("{&a,&c}e\u{301}x");
    let parts: Vec<_> = node.children.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(parts, vec!["e\u{301}", "x"]);
    assert_eq!(node.children[0].color, Some(named::GREEN));
    assert_eq!(node.children[1].color, Some(named::RED));
}

#[test]
fn single_character_run() {
    assert_snapshot!(tree("{&a,&c}x"), @r#"{"" [{"x" #55ff55}]}"#);
}

#[test]
fn gradient_inherits_decorations() {
    let node = LegacyText::get().parse("&l{&a,&c}ab");
    assert_eq!(node.decorations.get(Decoration::Bold), Some(true));
    assert_eq!(node.children.len(), 2);
}

// ============================================================================
// Malformed Gradients
// ============================================================================

#[test]
fn decoration_stop_rolls_back() {
    assert_snapshot!(
        tree("{&l,&c}white"),
        @r#"{"{" [{"," bold [{"}white" #ff5555}]}]}"#
    );
}

#[test]
fn unterminated_gradient_rolls_back() {
    assert_snapshot!(
        tree("{&a,&cred"),
        @r#"{"{" [{"," #55ff55 [{"red" #ff5555}]}]}"#
    );
}

#[test]
fn single_stop_rolls_back() {
    assert_snapshot!(tree("{&a}x"), @r#"{"{" [{"}x" #55ff55}]}"#);
}

#[test]
fn bad_slot_rolls_back() {
    assert_snapshot!(tree("{not a gradient}"), @r#"{"{not a gradient}"}"#);
    assert_snapshot!(tree("{[nope],&a}x"), @r#"{"{[nope]," [{"}x" #55ff55}]}"#);
}
