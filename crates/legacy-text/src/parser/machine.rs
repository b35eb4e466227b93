//! The character state machine: plain text, escapes, legacy codes, hex
//! colors and gradients. Bracket directives live in `directive.rs`.
//!
//! A directive that turns out to be malformed is rolled back: its first
//! character becomes literal text and the rest are queued to go through the
//! machine again, so an escape or a valid directive inside it still takes
//! effect. The queue is drained in a loop, never by recursion.

use std::mem;

use crate::color::Color;
use crate::legacy::{legacy_format, LegacyFormat};
use crate::node::TextNode;

use super::context::{Bracket, Mode};
use super::Parser;

const HEX_DIGITS: usize = 6;

impl Parser<'_> {
    pub(crate) fn feed_str(&mut self, input: &str) {
        for c in input.chars() {
            self.feed(c);
        }
    }

    pub(crate) fn feed(&mut self, c: char) {
        self.step(c);
        while let Some(c) = self.ctx.replay.pop_front() {
            self.step(c);
        }
    }

    fn step(&mut self, c: char) {
        match mem::take(&mut self.ctx.mode) {
            Mode::Plain => self.feed_plain(c),
            Mode::Escape => self.ctx.content.push(c),
            Mode::Legacy => self.feed_legacy(c),
            Mode::Hex(digits) => self.feed_hex(digits, c),
            Mode::Bracket(state) => self.feed_bracket(state, c),
            Mode::GradientColor => self.feed_gradient_color(c),
            Mode::GradientDelimiter => self.feed_gradient_delimiter(c),
        }
    }

    fn feed_plain(&mut self, c: char) {
        match c {
            '\\' => self.ctx.mode = Mode::Escape,
            '[' => self.begin(c, Mode::Bracket(Bracket::Prefix(String::new()))),
            '{' => {
                self.ctx.draft = Some(Vec::new());
                self.begin(c, Mode::GradientColor);
            }
            c if self.is_color_char(c) => self.begin(c, Mode::Legacy),
            c => self.ctx.content.push(c),
        }
    }

    pub(super) fn is_color_char(&self, c: char) -> bool {
        self.config.use_legacy && c == self.config.color_char
    }

    fn begin(&mut self, c: char, mode: Mode) {
        self.ctx.rollback.clear();
        self.ctx.rollback.push(c);
        self.ctx.value_start = None;
        self.ctx.mode = mode;
    }

    /// The open directive took effect; its raw text is no longer needed.
    pub(super) fn complete(&mut self) {
        self.ctx.rollback.clear();
        self.ctx.mode = Mode::Plain;
    }

    pub(super) fn rollback(&mut self) {
        let raw = mem::take(&mut self.ctx.rollback);
        self.ctx.mode = Mode::Plain;
        self.ctx.draft = None;
        log::trace!("rolling back {:?}", raw);

        let mut chars = raw.chars();
        if let Some(first) = chars.next() {
            self.ctx.content.push(first);
        }
        for c in chars.rev() {
            self.ctx.replay.push_front(c);
        }
    }

    /// Roll back until no directive is open and nothing is left to replay.
    /// A dangling escape is kept as a literal backslash.
    pub(super) fn abort_directive(&mut self) {
        loop {
            if let Some(c) = self.ctx.replay.pop_front() {
                self.step(c);
            } else if self.ctx.mode == Mode::Escape {
                self.ctx.mode = Mode::Plain;
                self.ctx.content.push('\\');
            } else if self.ctx.in_directive() {
                self.mark_unclosed();
                self.rollback();
            } else {
                break;
            }
        }
        self.ctx.unclosed_tail = None;
    }

    /// An escaped value that reached the end without a closing `]` leaves
    /// the same verdict for any value starting later in its replay.
    fn mark_unclosed(&mut self) {
        let Some(start) = self.ctx.value_start else {
            return;
        };
        let tail = self.ctx.rollback.chars().count().saturating_sub(start);
        self.ctx.unclosed_tail = Some(self.ctx.unclosed_tail.map_or(tail, |t| t.max(tail)));
    }

    fn feed_legacy(&mut self, c: char) {
        self.ctx.rollback.push(c);
        if c == '#' && self.config.adventure_hex {
            self.ctx.mode = Mode::Hex(String::new());
            return;
        }

        match legacy_format(c) {
            Some(LegacyFormat::Color(color)) if self.ctx.draft.is_some() => self.push_stop(color),
            Some(format) if self.ctx.draft.is_none() => {
                self.complete();
                self.apply_legacy(format);
            }
            _ => self.rollback(),
        }
    }

    fn apply_legacy(&mut self, format: LegacyFormat) {
        match format {
            LegacyFormat::Color(color) => self.ctx.apply_color(color, self.config.color_resets),
            LegacyFormat::Decoration(decoration) => self.ctx.set_decoration(decoration, true),
            LegacyFormat::Reset => self.ctx.reset(),
        }
    }

    fn feed_hex(&mut self, mut digits: String, c: char) {
        self.ctx.rollback.push(c);
        if !c.is_ascii_hexdigit() {
            return self.rollback();
        }
        digits.push(c);
        if digits.len() < HEX_DIGITS {
            self.ctx.mode = Mode::Hex(digits);
            return;
        }

        match Color::parse_hex(&digits) {
            Ok(color) if self.ctx.draft.is_some() => self.push_stop(color),
            Ok(color) => {
                self.complete();
                self.ctx.apply_color(color, self.config.color_resets);
            }
            Err(_) => self.rollback(),
        }
    }

    /// Record a gradient stop and wait for `,` or `}`.
    pub(super) fn push_stop(&mut self, color: Color) {
        if let Some(stops) = self.ctx.draft.as_mut() {
            stops.push(color);
        }
        self.ctx.mode = Mode::GradientDelimiter;
    }

    fn feed_gradient_color(&mut self, c: char) {
        self.ctx.rollback.push(c);
        match c {
            '[' => self.ctx.mode = Mode::Bracket(Bracket::Slot(String::new())),
            c if self.is_color_char(c) => self.ctx.mode = Mode::Legacy,
            _ => self.rollback(),
        }
    }

    fn feed_gradient_delimiter(&mut self, c: char) {
        self.ctx.rollback.push(c);
        match c {
            ',' => self.ctx.mode = Mode::GradientColor,
            '}' => {
                let stops = self.ctx.draft.take().unwrap_or_default();
                if stops.len() < 2 {
                    return self.rollback();
                }
                self.complete();
                self.ctx.open_gradient(stops);
            }
            _ => self.rollback(),
        }
    }

    /// Roll back anything still open and build the tree.
    pub(crate) fn finish(mut self) -> TextNode {
        self.abort_directive();
        self.ctx.into_tree()
    }
}
