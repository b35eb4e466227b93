//! The placeholder pass that runs ahead of the state machine.

use crate::error::ParseError;
use crate::replace::{RecursionPolicy, Replacement, ReplacementRule};
use crate::style::Style;

use super::Parser;

/// Nesting limit for literal replacements that match further rules.
pub const MAX_REPLACEMENT_DEPTH: usize = 64;

impl<'a> Parser<'a> {
    /// Feed `span` to the machine, replacing placeholder matches.
    ///
    /// The first rule in `rules` with a non-empty match wins at its leftmost
    /// match. Text around the match is substituted with the same rules.
    /// Unmatched text reaches the machine in order, and the machine state
    /// carries across spans.
    pub(crate) fn substitute(
        &mut self,
        span: &str,
        rules: &'a [ReplacementRule],
        depth: usize,
    ) -> Result<(), ParseError> {
        if span.is_empty() {
            return Ok(());
        }

        let found = rules.iter().enumerate().find_map(|(index, rule)| {
            let caps = rule.find(span)?;
            let range = caps.get(0)?.range();
            Some((index, rule, caps, range))
        });
        let Some((index, rule, caps, range)) = found else {
            self.feed_str(span);
            return Ok(());
        };

        self.substitute(&span[..range.start], rules, depth)?;
        let replacement = rule.resolve(&caps);
        self.replace(replacement, &rules[index + 1..], depth)?;
        self.substitute(&span[range.end..], rules, depth)
    }

    fn replace(
        &mut self,
        replacement: Replacement,
        following: &'a [ReplacementRule],
        depth: usize,
    ) -> Result<(), ParseError> {
        let resets = self.config.color_resets;
        match replacement {
            Replacement::Literal(text) => {
                let scoped: &'a [ReplacementRule] = match self.policy {
                    RecursionPolicy::None => &[],
                    RecursionPolicy::FollowingOnly => following,
                    RecursionPolicy::All => self.rules,
                };
                if scoped.is_empty() {
                    self.feed_str(&text);
                    return Ok(());
                }
                if depth >= MAX_REPLACEMENT_DEPTH {
                    log::warn!(
                        "replacement recursion passed {} levels at {:?}",
                        MAX_REPLACEMENT_DEPTH,
                        text
                    );
                    return Err(ParseError::ReplacementDepthExceeded(MAX_REPLACEMENT_DEPTH));
                }
                self.substitute(&text, scoped, depth + 1)
            }
            Replacement::Color(color) => {
                self.abort_directive();
                self.ctx.apply_style(Style::color(color), resets);
                Ok(())
            }
            Replacement::Decoration(decoration) => {
                self.abort_directive();
                self.ctx.apply_style(Style::from(decoration), resets);
                Ok(())
            }
            Replacement::Style(style) => {
                self.abort_directive();
                self.ctx.apply_style(style, resets);
                Ok(())
            }
            Replacement::Node(node) => {
                self.abort_directive();
                self.ctx.attach(node);
                Ok(())
            }
            Replacement::Builder(builder) => {
                self.abort_directive();
                self.ctx.attach(builder.build());
                Ok(())
            }
        }
    }
}
