//! Placeholder replacement rules.
//!
//! A rule pairs a regular expression with a resolver that turns each match
//! into a [`Replacement`]. Rules are applied before markup is interpreted;
//! literal replacements are themselves parsed as markup.

use std::fmt;

use regex::{Captures, Regex};

use crate::color::Color;
use crate::error::ParseError;
use crate::node::{TextNode, TextNodeBuilder};
use crate::style::{Decoration, Style};

/// The value substituted for a placeholder match.
#[derive(Clone, Debug, PartialEq)]
pub enum Replacement {
    /// Text parsed as markup in place of the match.
    Literal(String),
    /// Color everything that follows.
    Color(Color),
    /// Enable a decoration for everything that follows.
    Decoration(Decoration),
    /// Apply color and decorations to everything that follows.
    Style(Style),
    /// Insert a prebuilt sub-tree.
    Node(TextNode),
    /// Insert the node a builder produces.
    Builder(TextNodeBuilder),
}

impl From<&str> for Replacement {
    fn from(text: &str) -> Self {
        Replacement::Literal(text.to_string())
    }
}

impl From<String> for Replacement {
    fn from(text: String) -> Self {
        Replacement::Literal(text)
    }
}

impl From<Color> for Replacement {
    fn from(color: Color) -> Self {
        Replacement::Color(color)
    }
}

impl From<Decoration> for Replacement {
    fn from(decoration: Decoration) -> Self {
        Replacement::Decoration(decoration)
    }
}

impl From<Style> for Replacement {
    fn from(style: Style) -> Self {
        Replacement::Style(style)
    }
}

impl From<TextNode> for Replacement {
    fn from(node: TextNode) -> Self {
        Replacement::Node(node)
    }
}

impl From<TextNodeBuilder> for Replacement {
    fn from(builder: TextNodeBuilder) -> Self {
        Replacement::Builder(builder)
    }
}

/// Which rules may match inside a literal replacement's own text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecursionPolicy {
    /// Literal replacements are only parsed as markup.
    None,
    /// Rules registered after the one that matched.
    #[default]
    FollowingOnly,
    /// Every rule, including the one that matched.
    All,
}

type Resolver = Box<dyn Fn(&Captures<'_>) -> Replacement + Send + Sync>;

/// A pattern and the resolver producing its replacement.
pub struct ReplacementRule {
    pattern: Regex,
    resolver: Resolver,
}

impl ReplacementRule {
    /// Create a rule from a compiled pattern and a resolver.
    pub fn new<F>(pattern: Regex, resolver: F) -> Self
    where
        F: Fn(&Captures<'_>) -> Replacement + Send + Sync + 'static,
    {
        Self {
            pattern,
            resolver: Box::new(resolver),
        }
    }

    /// Replace every occurrence of `target`, matched literally.
    ///
    /// # Examples
    ///
    /// ```
    /// use legacy_text::{named, ReplacementRule};
    ///
    /// let rule = ReplacementRule::literal("%player%", named::GOLD).unwrap();
    /// assert_eq!(rule.pattern().as_str(), "%player%");
    /// ```
    pub fn literal(target: &str, value: impl Into<Replacement>) -> Result<Self, ParseError> {
        Self::regex(&regex::escape(target), value)
    }

    /// Replace every match of a regular expression with a fixed value.
    pub fn regex(pattern: &str, value: impl Into<Replacement>) -> Result<Self, ParseError> {
        let value = value.into();
        Self::regex_with(pattern, move |_| value.clone())
    }

    /// Replace every match of a regular expression with a computed value.
    pub fn regex_with<F>(pattern: &str, resolver: F) -> Result<Self, ParseError>
    where
        F: Fn(&Captures<'_>) -> Replacement + Send + Sync + 'static,
    {
        let pattern =
            Regex::new(pattern).map_err(|err| ParseError::invalid_pattern(pattern, err))?;
        Ok(Self::new(pattern, resolver))
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Leftmost non-empty match in `haystack`.
    pub(crate) fn find<'h>(&self, haystack: &'h str) -> Option<Captures<'h>> {
        self.pattern
            .captures_iter(haystack)
            .find(|caps| caps.get(0).is_some_and(|m| !m.is_empty()))
    }

    pub(crate) fn resolve(&self, caps: &Captures<'_>) -> Replacement {
        (self.resolver)(caps)
    }
}

impl fmt::Debug for ReplacementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplacementRule")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}
