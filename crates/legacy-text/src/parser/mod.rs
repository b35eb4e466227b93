//! Parser for enhanced legacy text.
//!
//! Input runs through the placeholder pass first, then a single-pass
//! character state machine that builds the text tree as it goes. Malformed
//! directives are never errors; they roll back to literal text.

mod builder;
mod context;
mod directive;
mod machine;
mod substitute;

pub use substitute::MAX_REPLACEMENT_DEPTH;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::node::TextNode;
use crate::replace::{RecursionPolicy, ReplacementRule};

use context::ParseContext;

/// Parse `input` with placeholder replacement.
///
/// Fails only when literal replacements keep matching rules past
/// [`MAX_REPLACEMENT_DEPTH`] levels.
///
/// # Examples
///
/// ```
/// use legacy_text::parser::parse;
/// use legacy_text::{named, ParserConfig, RecursionPolicy, ReplacementRule};
///
/// let rules = vec![ReplacementRule::literal("%name%", "&lSteve").unwrap()];
/// let node = parse(&ParserConfig::default(), "&bHi %name%", &rules, RecursionPolicy::default()).unwrap();
/// assert_eq!(node.plain_text(), "Hi Steve");
/// assert_eq!(node.color, Some(named::AQUA));
/// ```
pub fn parse(
    config: &ParserConfig,
    input: &str,
    rules: &[ReplacementRule],
    policy: RecursionPolicy,
) -> Result<TextNode, ParseError> {
    log::debug!(
        "parsing {} chars with {} replacement rules ({:?})",
        input.len(),
        rules.len(),
        policy
    );
    let mut parser = Parser::new(config, rules, policy);
    parser.substitute(input, rules, 0)?;
    Ok(parser.finish())
}

/// Parse `input` as markup only.
///
/// # Examples
///
/// ```
/// use legacy_text::parser::parse_markup;
/// use legacy_text::{named, ParserConfig};
///
/// let node = parse_markup(&ParserConfig::default(), "&cred");
/// assert_eq!(node.content, "red");
/// assert_eq!(node.color, Some(named::RED));
/// ```
pub fn parse_markup(config: &ParserConfig, input: &str) -> TextNode {
    log::debug!("parsing {} chars of markup", input.len());
    let mut parser = Parser::new(config, &[], RecursionPolicy::None);
    parser.feed_str(input);
    parser.finish()
}

/// One parse: configuration, the full rule list, and the machine state.
pub(crate) struct Parser<'a> {
    config: &'a ParserConfig,
    rules: &'a [ReplacementRule],
    policy: RecursionPolicy,
    ctx: ParseContext,
}

impl<'a> Parser<'a> {
    fn new(config: &'a ParserConfig, rules: &'a [ReplacementRule], policy: RecursionPolicy) -> Self {
        Self {
            config,
            rules,
            policy,
            ctx: ParseContext::new(),
        }
    }
}
