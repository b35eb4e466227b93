//! Bracket directives: `[color:...]`, `[click:...]`, `[hover:...]`,
//! `[insert:...]`, decorations, and color slots inside gradients.

use crate::color::{resolve_color, Color, ColorNamespace};
use crate::node::{ClickAction, ClickEvent, HoverEvent};
use crate::style::Decoration;

use super::context::{Bracket, Mode, ValueKind};
use super::{parse_markup, Parser};

const KEYWORDS: [&str; 5] = ["color", "click", "hover", "insert", "decoration"];

const SHOW_TEXT: &str = "show_text";

/// No valid color or decoration token is longer than this, so a value past
/// it is rolled back without waiting for `]`.
const MAX_TOKEN_LEN: usize = 64;

/// Can `candidate` still grow into a directive keyword?
fn is_keyword_prefix(candidate: &str) -> bool {
    KEYWORDS
        .into_iter()
        .chain(Decoration::names())
        .any(|keyword| keyword.starts_with(candidate))
}

fn is_click_action_prefix(candidate: &str) -> bool {
    let candidate = candidate.to_ascii_lowercase();
    ClickAction::ACCEPTED
        .into_iter()
        .any(|action| action.name().starts_with(&candidate))
}

/// `true`/`on` or `false`/`off`.
fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" | "on" => Some(true),
        "false" | "off" => Some(false),
        _ => None,
    }
}

/// A color token, optionally namespaced as `css:red` or `hex:ff0000`.
pub(crate) fn color_token(token: &str) -> Option<Color> {
    match token.split_once(':') {
        Some((namespace, name)) => resolve_color(Some(ColorNamespace::from_name(namespace)?), name),
        None => resolve_color(None, token),
    }
}

/// Progress of a directive value.
enum ValueStep {
    Open { value: String, escaped: bool },
    Closed(String),
}

/// Append `c` to a value ending at the first unescaped `]`.
///
/// `\` escapes the next character. With `keep_escapes` the backslash stays
/// in the value for a nested parse to interpret.
fn accumulate(mut value: String, escaped: bool, c: char, keep_escapes: bool) -> ValueStep {
    if escaped {
        value.push(c);
        return ValueStep::Open {
            value,
            escaped: false,
        };
    }
    match c {
        ']' => ValueStep::Closed(value),
        '\\' => {
            if keep_escapes {
                value.push(c);
            }
            ValueStep::Open {
                value,
                escaped: true,
            }
        }
        c => {
            value.push(c);
            ValueStep::Open {
                value,
                escaped: false,
            }
        }
    }
}

impl Parser<'_> {
    pub(super) fn feed_bracket(&mut self, state: Bracket, c: char) {
        self.ctx.rollback.push(c);
        match state {
            Bracket::Prefix(prefix) => self.feed_prefix(prefix, c),
            Bracket::Slot(token) => self.feed_slot(token, c),
            Bracket::Value {
                kind,
                value,
                escaped,
            } => match accumulate(value, escaped, c, false) {
                ValueStep::Open { value, .. } if kind.is_token() && value.len() > MAX_TOKEN_LEN => {
                    self.rollback()
                }
                ValueStep::Open { value, escaped } => {
                    self.ctx.mode = Mode::Bracket(Bracket::Value {
                        kind,
                        value,
                        escaped,
                    })
                }
                ValueStep::Closed(value) => self.finish_value(kind, value),
            },
            Bracket::ClickAction(name) => self.feed_click_action(name, c),
            Bracket::ClickValue {
                action,
                value,
                escaped,
            } => match accumulate(value, escaped, c, false) {
                ValueStep::Open { value, escaped } => {
                    self.ctx.mode = Mode::Bracket(Bracket::ClickValue {
                        action,
                        value,
                        escaped,
                    })
                }
                ValueStep::Closed(value) if value.is_empty() => self.rollback(),
                ValueStep::Closed(value) => {
                    self.complete();
                    self.ctx.set_click(ClickEvent::new(action, value));
                }
            },
            Bracket::HoverAction(name) => self.feed_hover_action(name, c),
            Bracket::HoverValue { value, escaped } => match accumulate(value, escaped, c, true) {
                ValueStep::Open { value, escaped } => {
                    self.ctx.mode = Mode::Bracket(Bracket::HoverValue { value, escaped })
                }
                ValueStep::Closed(value) if value.is_empty() => self.rollback(),
                ValueStep::Closed(value) => {
                    let text = parse_markup(self.config, &value);
                    self.complete();
                    self.ctx.set_hover(HoverEvent::show_text(text));
                }
            },
        }
    }

    fn feed_prefix(&mut self, mut prefix: String, c: char) {
        match c {
            ':' => self.open_value(&prefix),
            ']' => self.close_bare(&prefix),
            c => {
                prefix.push(c);
                if is_keyword_prefix(&prefix) {
                    self.ctx.mode = Mode::Bracket(Bracket::Prefix(prefix));
                } else {
                    self.rollback();
                }
            }
        }
    }

    fn open_value(&mut self, prefix: &str) {
        match prefix {
            "click" => self.ctx.mode = Mode::Bracket(Bracket::ClickAction(String::new())),
            "hover" => self.ctx.mode = Mode::Bracket(Bracket::HoverAction(String::new())),
            "color" => self.open_scan(Bracket::value(ValueKind::Color)),
            "insert" => self.open_scan(Bracket::value(ValueKind::Insert)),
            "decoration" => self.open_scan(Bracket::value(ValueKind::DecorationName)),
            name => match Decoration::from_name(name) {
                Some(decoration) => self.open_scan(Bracket::value(ValueKind::Decoration(decoration))),
                None => self.rollback(),
            },
        }
    }

    /// Start reading a value that ends at the first unescaped `]`.
    fn open_scan(&mut self, state: Bracket) {
        if self.ctx.value_cannot_close() {
            return self.rollback();
        }
        self.ctx.value_start = Some(self.ctx.rollback.chars().count());
        self.ctx.mode = Mode::Bracket(state);
    }

    /// `[color]`, `[click]`, `[hover]`, `[insert]` and bare decorations.
    fn close_bare(&mut self, prefix: &str) {
        let applied = match prefix {
            "color" => self.ctx.clear_color(),
            "click" => self.ctx.clear_click(),
            "hover" => self.ctx.clear_hover(),
            "insert" => self.ctx.clear_insertion(),
            name => match Decoration::from_name(name) {
                Some(decoration) => {
                    self.ctx.toggle_decoration(decoration);
                    true
                }
                None => false,
            },
        };
        if applied {
            self.complete();
        } else {
            self.rollback();
        }
    }

    fn finish_value(&mut self, kind: ValueKind, value: String) {
        let applied = match kind {
            ValueKind::Color => match color_token(&value) {
                Some(color) => {
                    self.ctx.apply_color(color, self.config.color_resets);
                    true
                }
                None => false,
            },
            ValueKind::Insert => {
                self.ctx.set_insertion((!value.is_empty()).then_some(value));
                true
            }
            ValueKind::Decoration(decoration) => match parse_flag(&value) {
                Some(flag) => {
                    self.ctx.set_decoration(decoration, flag);
                    true
                }
                None => false,
            },
            ValueKind::DecorationName => match value.split_once(':') {
                Some((name, flag)) => match (Decoration::from_name(name), parse_flag(flag)) {
                    (Some(decoration), Some(flag)) => {
                        self.ctx.set_decoration(decoration, flag);
                        true
                    }
                    _ => false,
                },
                None => match Decoration::from_name(&value) {
                    Some(decoration) => {
                        self.ctx.toggle_decoration(decoration);
                        true
                    }
                    None => false,
                },
            },
        };
        if applied {
            self.complete();
        } else {
            self.rollback();
        }
    }

    /// A `[token]` color stop inside `{...}`.
    fn feed_slot(&mut self, mut token: String, c: char) {
        if c != ']' {
            token.push(c);
            if token.len() > MAX_TOKEN_LEN {
                return self.rollback();
            }
            self.ctx.mode = Mode::Bracket(Bracket::Slot(token));
            return;
        }
        let name = token.strip_prefix("color:").unwrap_or(&token);
        match color_token(name) {
            Some(color) => self.push_stop(color),
            None => self.rollback(),
        }
    }

    fn feed_click_action(&mut self, mut name: String, c: char) {
        if c == ':' {
            match ClickAction::from_name(&name) {
                Some(action) => self.open_scan(Bracket::ClickValue {
                    action,
                    value: String::new(),
                    escaped: false,
                }),
                None => self.rollback(),
            }
            return;
        }
        name.push(c);
        if is_click_action_prefix(&name) {
            self.ctx.mode = Mode::Bracket(Bracket::ClickAction(name));
        } else {
            self.rollback();
        }
    }

    fn feed_hover_action(&mut self, mut name: String, c: char) {
        if c == ':' {
            if name.eq_ignore_ascii_case(SHOW_TEXT) {
                self.open_scan(Bracket::HoverValue {
                    value: String::new(),
                    escaped: false,
                });
            } else {
                self.rollback();
            }
            return;
        }
        name.push(c);
        if SHOW_TEXT.starts_with(name.to_ascii_lowercase().as_str()) {
            self.ctx.mode = Mode::Bracket(Bracket::HoverAction(name));
        } else {
            self.rollback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::named;

    #[test]
    fn keyword_prefixes() {
        assert!(is_keyword_prefix("c"));
        assert!(is_keyword_prefix("col"));
        assert!(is_keyword_prefix("underline"));
        assert!(is_keyword_prefix("decoration"));
        assert!(!is_keyword_prefix("colour"));
        assert!(!is_keyword_prefix("Bold"));
        assert!(!is_keyword_prefix("x"));
    }

    #[test]
    fn click_action_prefixes() {
        assert!(is_click_action_prefix("run"));
        assert!(is_click_action_prefix("OPEN_U"));
        assert!(!is_click_action_prefix("open_f"));
    }

    #[test]
    fn color_tokens() {
        assert_eq!(color_token("red"), Some(named::RED));
        assert_eq!(color_token("css:red"), Some(Color::from_hex(0xff0000)));
        assert_eq!(color_token("hex:#00ff00"), Some(Color::from_hex(0x00ff00)));
        assert_eq!(color_token("ff0000"), Some(Color::from_hex(0xff0000)));
        assert_eq!(color_token("invalid:red"), None);
        assert_eq!(color_token(""), None);
    }

    #[test]
    fn escaped_values() {
        let ValueStep::Open { value, escaped } = accumulate(String::new(), false, '\\', false) else {
            panic!("expected open value");
        };
        assert!(escaped);
        assert!(value.is_empty());
        assert!(matches!(
            accumulate(value, escaped, ']', false),
            ValueStep::Open { ref value, escaped: false } if value == "]"
        ));
        assert!(matches!(
            accumulate("a".into(), false, ']', false),
            ValueStep::Closed(ref value) if value == "a"
        ));
    }
}
