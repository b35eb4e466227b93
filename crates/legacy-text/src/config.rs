//! Parser configuration and the embedding API.

use once_cell::sync::Lazy;
use regex::Captures;

use crate::error::ParseError;
use crate::node::TextNode;
use crate::parser;
use crate::replace::{RecursionPolicy, Replacement, ReplacementRule};

/// Characters with fixed meaning in markup, unusable as the color character.
pub const RESERVED_CHARS: [char; 7] = ['\\', '[', ']', '{', '}', ',', ':'];

/// Options that change how markup is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Character introducing legacy codes (`&` by default).
    pub color_char: char,
    /// A color directive closes every open node instead of nesting.
    pub color_resets: bool,
    /// Recognise legacy codes at all.
    pub use_legacy: bool,
    /// Recognise `&#rrggbb` hex colors.
    pub adventure_hex: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            color_char: '&',
            color_resets: false,
            use_legacy: true,
            adventure_hex: true,
        }
    }
}

impl ParserConfig {
    /// Check the configuration can be parsed unambiguously.
    pub fn validate(&self) -> Result<(), ParseError> {
        if RESERVED_CHARS.contains(&self.color_char) {
            return Err(ParseError::ReservedColorChar(self.color_char));
        }
        Ok(())
    }
}

static DEFAULT_PARSER: Lazy<LegacyText> = Lazy::new(|| LegacyText {
    config: ParserConfig::default(),
});

/// A configured parser.
///
/// Immutable once built, so one instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use legacy_text::{named, LegacyText};
///
/// let node = LegacyText::get().parse("&aHello");
/// assert_eq!(node.content, "Hello");
/// assert_eq!(node.color, Some(named::GREEN));
///
/// let custom = LegacyText::builder().color_character('!').build().unwrap();
/// assert_eq!(custom.parse("&aHello").content, "&aHello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyText {
    config: ParserConfig,
}

impl LegacyText {
    /// The shared parser with default settings.
    pub fn get() -> &'static LegacyText {
        &DEFAULT_PARSER
    }

    pub fn builder() -> LegacyTextBuilder {
        LegacyTextBuilder::default()
    }

    /// A parser for `config`, rejecting a reserved color character.
    pub fn new(config: ParserConfig) -> Result<Self, ParseError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse markup without placeholders.
    pub fn parse(&self, input: &str) -> TextNode {
        parser::parse_markup(&self.config, input)
    }

    /// Parse markup after applying `rules`.
    pub fn parse_with(
        &self,
        input: &str,
        rules: &[ReplacementRule],
        policy: RecursionPolicy,
    ) -> Result<TextNode, ParseError> {
        parser::parse(&self.config, input, rules, policy)
    }

    /// Start a parse with placeholder rules.
    pub fn build_component(&self, input: impl Into<String>) -> ComponentBuilder<'_> {
        ComponentBuilder {
            parser: self,
            input: input.into(),
            rules: Vec::new(),
            policy: RecursionPolicy::default(),
            error: None,
        }
    }
}

/// Builder for [`LegacyText`].
#[derive(Clone, Debug, Default)]
pub struct LegacyTextBuilder {
    config: ParserConfig,
}

impl LegacyTextBuilder {
    pub fn color_character(mut self, c: char) -> Self {
        self.config.color_char = c;
        self
    }

    pub fn color_resets(mut self, enabled: bool) -> Self {
        self.config.color_resets = enabled;
        self
    }

    pub fn use_legacy(mut self, enabled: bool) -> Self {
        self.config.use_legacy = enabled;
        self
    }

    pub fn adventure_hex(mut self, enabled: bool) -> Self {
        self.config.adventure_hex = enabled;
        self
    }

    pub fn build(self) -> Result<LegacyText, ParseError> {
        LegacyText::new(self.config)
    }
}

/// Collects placeholder rules for one input, then parses it.
///
/// Rules match in registration order. An invalid pattern is reported by
/// [`ComponentBuilder::build`].
///
/// # Examples
///
/// ```
/// use legacy_text::{named, LegacyText};
///
/// let node = LegacyText::get()
///     .build_component("Hello %player%")
///     .replace("%player%", "&6Steve")
///     .build()
///     .unwrap();
/// assert_eq!(node.plain_text(), "Hello Steve");
/// assert_eq!(node.children[0].color, Some(named::GOLD));
/// ```
#[derive(Debug)]
pub struct ComponentBuilder<'p> {
    parser: &'p LegacyText,
    input: String,
    rules: Vec<ReplacementRule>,
    policy: RecursionPolicy,
    error: Option<ParseError>,
}

impl ComponentBuilder<'_> {
    /// Replace occurrences of `target`, matched literally.
    pub fn replace(self, target: &str, value: impl Into<Replacement>) -> Self {
        let rule = ReplacementRule::literal(target, value);
        self.push(rule)
    }

    /// Replace matches of a regular expression.
    pub fn replace_all(self, pattern: &str, value: impl Into<Replacement>) -> Self {
        let rule = ReplacementRule::regex(pattern, value);
        self.push(rule)
    }

    /// Replace matches of a regular expression with a computed value.
    pub fn replace_with<F>(self, pattern: &str, resolver: F) -> Self
    where
        F: Fn(&Captures<'_>) -> Replacement + Send + Sync + 'static,
    {
        let rule = ReplacementRule::regex_with(pattern, resolver);
        self.push(rule)
    }

    /// Add a prebuilt rule.
    pub fn rule(mut self, rule: ReplacementRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn recursion(mut self, policy: RecursionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn build(self) -> Result<TextNode, ParseError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.parser.parse_with(&self.input, &self.rules, self.policy)
    }

    fn push(mut self, rule: Result<ReplacementRule, ParseError>) -> Self {
        match rule {
            Ok(rule) => self.rules.push(rule),
            Err(err) if self.error.is_none() => self.error = Some(err),
            Err(_) => {}
        }
        self
    }
}
