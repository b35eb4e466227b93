//! Mutable state of one (possibly nested) parse.

use std::collections::VecDeque;

use crate::color::Color;
use crate::node::{ClickAction, ClickEvent, HoverEvent, TextNode};
use crate::style::{Decoration, Decorations, Style};

/// Which directive, if any, is being read.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum Mode {
    /// Literal text.
    #[default]
    Plain,
    /// After `\`: the next character is literal.
    Escape,
    /// After the legacy color character.
    Legacy,
    /// After `&#`, collecting up to six hex digits.
    Hex(String),
    /// Inside `[...]`.
    Bracket(Bracket),
    /// Inside `{...}`, expecting a color slot.
    GradientColor,
    /// Inside `{...}`, expecting `,` or `}`.
    GradientDelimiter,
}

/// Sub-states of a bracket directive.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Bracket {
    /// Reading the keyword before `:` or `]`.
    Prefix(String),
    /// A gradient slot: a color token up to `]`.
    Slot(String),
    /// Raw value of a `color:`, `insert:` or decoration directive.
    Value {
        kind: ValueKind,
        value: String,
        escaped: bool,
    },
    ClickAction(String),
    ClickValue {
        action: ClickAction,
        value: String,
        escaped: bool,
    },
    HoverAction(String),
    /// Nested markup, escapes kept for the nested parse.
    HoverValue { value: String, escaped: bool },
}

impl Bracket {
    pub(crate) fn value(kind: ValueKind) -> Self {
        Bracket::Value {
            kind,
            value: String::new(),
            escaped: false,
        }
    }
}

/// What a bracket value configures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ValueKind {
    Color,
    Insert,
    /// `[bold:true]`
    Decoration(Decoration),
    /// `[decoration:bold]` or `[decoration:bold:false]`
    DecorationName,
}

impl ValueKind {
    /// Color and decoration values are short tokens; insertions are free text.
    pub(crate) fn is_token(self) -> bool {
        !matches!(self, ValueKind::Insert)
    }
}

/// Style and events in effect for text that follows.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ActiveState {
    pub(crate) color: Option<Color>,
    pub(crate) decorations: Decorations,
    pub(crate) click: Option<ClickEvent>,
    pub(crate) hover: Option<HoverEvent>,
    pub(crate) insertion: Option<String>,
}

/// The state threaded through one character scan.
#[derive(Debug, Default)]
pub(crate) struct ParseContext {
    /// Literal characters not yet committed to `current`.
    pub(crate) content: String,
    /// The in-progress node.
    pub(crate) current: TextNode,
    /// Sealed nodes, oldest first, each to become the parent of the next.
    pub(crate) pending: Vec<TextNode>,
    /// The output root.
    pub(crate) root: TextNode,
    pub(crate) mode: Mode,
    /// Every raw character consumed since the open directive started.
    pub(crate) rollback: String,
    /// Raw characters of a rolled-back directive, fed again before any new
    /// input.
    pub(crate) replay: VecDeque<char>,
    /// Length of `rollback` where the open directive's escaped value began.
    pub(crate) value_start: Option<usize>,
    /// Set while aborting at the end of input: a value that begins with at
    /// most this many replay characters left cannot reach a closing `]`.
    pub(crate) unclosed_tail: Option<usize>,
    /// Stops of a `{...}` gradient still being read.
    pub(crate) draft: Option<Vec<Color>>,
    /// Stops of a closed gradient waiting for its run of text.
    pub(crate) gradient: Vec<Color>,
    pub(crate) active: ActiveState,
    /// Style re-applied to the head of the next chain after a commit.
    pub(crate) carry: Style,
}

impl ParseContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True while `current` has no text: a style change can then apply to
    /// it directly instead of starting a new node.
    pub(crate) fn at_node_start(&self) -> bool {
        self.content.is_empty() && !self.current.has_body()
    }

    pub(crate) fn in_directive(&self) -> bool {
        self.mode != Mode::Plain
    }

    /// True when a value opened now lies inside a span that already ran to
    /// the end of input without an unescaped `]`.
    pub(crate) fn value_cannot_close(&self) -> bool {
        self.unclosed_tail.is_some_and(|tail| self.replay.len() <= tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_is_plain() {
        let ctx = ParseContext::new();
        assert!(ctx.at_node_start());
        assert!(!ctx.in_directive());
        assert!(ctx.pending.is_empty());
        assert!(ctx.root.is_empty());
        assert!(ctx.replay.is_empty());
    }

    #[test]
    fn unclosed_tail_covers_the_end_of_replay() {
        let mut ctx = ParseContext::new();
        ctx.replay.extend("abc]".chars());
        assert!(!ctx.value_cannot_close());

        ctx.unclosed_tail = Some(3);
        assert!(!ctx.value_cannot_close());
        ctx.replay.pop_front();
        assert!(ctx.value_cannot_close());
    }

    #[test]
    fn only_insertions_are_free_text() {
        assert!(ValueKind::Color.is_token());
        assert!(ValueKind::DecorationName.is_token());
        assert!(!ValueKind::Insert.is_token());
    }

    #[test]
    fn pending_text_ends_node_start() {
        let mut ctx = ParseContext::new();
        ctx.content.push('a');
        assert!(!ctx.at_node_start());

        let mut ctx = ParseContext::new();
        ctx.current.children.push(TextNode::text("a"));
        assert!(!ctx.at_node_start());
    }
}
