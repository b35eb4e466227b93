//! Tree building operations on [`ParseContext`].
//!
//! Text accumulates in `content` until a directive seals `current`. A sealed
//! node is pushed onto `pending`, where each node becomes the parent of the
//! one sealed after it, so style set earlier is inherited by later text.
//! A commit folds the pending chain into a single child of the root; text
//! after a commit no longer inherits from it.

use std::mem;

use unicode_segmentation::UnicodeSegmentation;

use crate::color::Color;
use crate::gradient::Gradient;
use crate::node::{ClickEvent, HoverEvent, TextNode};
use crate::style::{Decoration, Decorations, Style};

use super::context::{ActiveState, ParseContext};

impl ParseContext {
    /// Move buffered text into `current`.
    ///
    /// With a gradient pending, the text becomes one colored child per
    /// grapheme and the gradient is consumed.
    pub(crate) fn flush_content(&mut self) {
        if self.content.is_empty() {
            return;
        }
        let content = mem::take(&mut self.content);

        match Gradient::new(mem::take(&mut self.gradient)) {
            Some(gradient) => {
                let graphemes: Vec<&str> = content.graphemes(true).collect();
                let colors = gradient.colors(graphemes.len());
                log::trace!(
                    "gradient over {} stops across {} graphemes",
                    gradient.stops().len(),
                    graphemes.len()
                );
                self.current.children.extend(
                    graphemes
                        .into_iter()
                        .zip(colors)
                        .map(|(grapheme, color)| TextNode::text(grapheme).color(color)),
                );
            }
            None => self.current.content.push_str(&content),
        }
    }

    /// Close `current` and start a fresh node.
    ///
    /// The sealed node picks up the active events if it renders anything
    /// and has none of its own. With `to_root` the pending chain is
    /// committed as well.
    pub(crate) fn seal(&mut self, to_root: bool) {
        self.flush_content();

        let mut node = mem::take(&mut self.current);
        if node.has_body() {
            if node.click.is_none() {
                node.click = self.active.click.clone();
            }
            if node.hover.is_none() {
                node.hover = self.active.hover.clone();
            }
            if node.insertion.is_none() {
                node.insertion = self.active.insertion.clone();
            }
        }
        if !node.is_empty() {
            if self.pending.is_empty() {
                node = self.carry.apply_under(node);
            }
            self.pending.push(node);
        }

        if to_root {
            self.commit();
        }
    }

    /// Fold `pending` into one chain and append it to the root.
    ///
    /// The style active at this point is carried to the head of the next
    /// chain, since that text is no longer nested inside this one.
    pub(crate) fn commit(&mut self) {
        let mut chain: Option<TextNode> = None;
        while let Some(mut node) = self.pending.pop() {
            if let Some(inner) = chain.take() {
                node.children.push(inner);
            }
            chain = Some(node);
        }
        if let Some(chain) = chain {
            self.root.children.push(chain);
        }
        self.carry = Style {
            color: self.active.color,
            decorations: self.active.decorations,
        };
    }

    /// Splice a prebuilt sub-tree in after any buffered text.
    pub(crate) fn attach(&mut self, node: TextNode) {
        self.flush_content();
        self.current.children.push(node);
        self.seal(false);
    }

    pub(crate) fn apply_color(&mut self, color: Color, color_resets: bool) {
        if color_resets {
            self.seal(true);
            self.active.decorations = Decorations::new();
            self.carry = Style::new();
        } else if !self.at_node_start() {
            self.seal(false);
        }
        self.gradient.clear();
        self.current.color = Some(color);
        self.active.color = Some(color);
    }

    /// Apply a style placeholder. The style always starts a new node.
    pub(crate) fn apply_style(&mut self, style: Style, color_resets: bool) {
        if style.color.is_some() && color_resets {
            self.seal(true);
            self.active.decorations = Decorations::new();
            self.carry = Style::new();
        } else {
            self.seal(false);
        }
        if let Some(color) = style.color {
            self.gradient.clear();
            self.current.color = Some(color);
            self.active.color = Some(color);
        }
        self.current.decorations = style.decorations;
        self.active.decorations = self.active.decorations.apply(&style.decorations);
    }

    pub(crate) fn set_decoration(&mut self, decoration: Decoration, value: bool) {
        if !self.at_node_start() {
            self.seal(false);
        }
        self.current.decorations.set(decoration, value);
        self.active.decorations.set(decoration, value);
    }

    /// Turn a decoration off if it is explicitly on, otherwise on.
    pub(crate) fn toggle_decoration(&mut self, decoration: Decoration) {
        let value = self.active.decorations.get(decoration) != Some(true);
        self.set_decoration(decoration, value);
    }

    /// `&r`: commit, then forget every style, event and gradient.
    pub(crate) fn reset(&mut self) {
        self.seal(true);
        self.gradient.clear();
        self.active = ActiveState::default();
        self.carry = Style::new();
    }

    /// `[color]`. Returns false, changing nothing, when no color is active.
    pub(crate) fn clear_color(&mut self) -> bool {
        if self.active.color.is_none() {
            return false;
        }
        self.seal(true);
        self.gradient.clear();
        self.active.color = None;
        self.active.decorations = Decorations::new();
        self.carry = Style::new();
        true
    }

    pub(crate) fn set_click(&mut self, click: ClickEvent) {
        if !self.at_node_start() {
            self.seal(false);
        }
        self.active.click = Some(click);
    }

    pub(crate) fn clear_click(&mut self) -> bool {
        if self.active.click.is_none() {
            return false;
        }
        self.seal(true);
        self.active.click = None;
        true
    }

    pub(crate) fn set_hover(&mut self, hover: HoverEvent) {
        if !self.at_node_start() {
            self.seal(false);
        }
        self.active.hover = Some(hover);
    }

    pub(crate) fn clear_hover(&mut self) -> bool {
        if self.active.hover.is_none() {
            return false;
        }
        self.seal(true);
        self.active.hover = None;
        true
    }

    /// `[insert:x]` and `[insert:]`. Insertions never nest.
    pub(crate) fn set_insertion(&mut self, insertion: Option<String>) {
        self.seal(true);
        self.active.insertion = insertion;
    }

    /// Bare `[insert]`, only valid while an insertion is active.
    pub(crate) fn clear_insertion(&mut self) -> bool {
        if self.active.insertion.is_none() {
            return false;
        }
        self.set_insertion(None);
        true
    }

    /// A closed `{...}` gradient colors the next run of text.
    pub(crate) fn open_gradient(&mut self, stops: Vec<Color>) {
        if !self.at_node_start() {
            self.seal(false);
        }
        self.gradient = stops;
    }

    /// Commit everything and unwrap a root holding a single child.
    pub(crate) fn into_tree(mut self) -> TextNode {
        self.seal(true);
        let mut root = self.root;
        match root.children.len() {
            1 => root.children.remove(0),
            _ => root,
        }
    }
}

impl Style {
    /// Fill in the parts of `node`'s style it leaves unset.
    pub(crate) fn apply_under(&self, node: TextNode) -> TextNode {
        if self.is_empty() {
            return node;
        }
        let decorations = self.decorations.apply(&node.decorations);
        TextNode {
            color: node.color.or(self.color),
            decorations,
            ..node
        }
    }
}
