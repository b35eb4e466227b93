//! Enhanced legacy text parser.
//!
//! This crate turns chat-style markup into a tree of styled text nodes. The
//! markup extends classic single-character color codes with bracketed
//! directives, inline gradients, and caller-supplied placeholders.
//!
//! # Overview
//!
//! - `&c`, `&l`, `&r` - Legacy color, decoration and reset codes
//! - `&#ff0000` - Hex color
//! - `[color:red]`, `[color:css:aliceblue]`, `[color]` - Set or clear a color
//! - `[bold]`, `[italic:false]`, `[decoration:underline]` - Decorations
//! - `[click:run_command:/help]`, `[click]` - Click events
//! - `[hover:show_text:&ahi]`, `[hover]` - Hover text, itself markup
//! - `[insert:text]`, `[insert]` - Shift-click insertion
//! - `{&a,&c}text` - Gradient over the following run of text
//! - `\&`, `\[`, `\{` - Escapes
//!
//! Parsing never fails on malformed markup: a directive that does not
//! complete is emitted as the literal text it was written as.
//!
//! # Usage
//!
//! ```
//! use legacy_text::{named, Decoration, LegacyText};
//!
//! let node = LegacyText::get().parse("&bAqua &lbold");
//! assert_eq!(node.plain_text(), "Aqua bold");
//! assert_eq!(node.color, Some(named::AQUA));
//! assert_eq!(node.children[0].decorations.get(Decoration::Bold), Some(true));
//!
//! let node = LegacyText::get()
//!     .build_component("Welcome, %name%!")
//!     .replace("%name%", "&eSteve")
//!     .build()
//!     .unwrap();
//! assert_eq!(node.plain_text(), "Welcome, Steve!");
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod gradient;
pub mod legacy;
pub mod node;
pub mod parser;
pub mod replace;
pub mod style;

// Re-export main types at crate root
pub use color::{named, resolve_color, Color, ColorNamespace};
pub use config::{ComponentBuilder, LegacyText, LegacyTextBuilder, ParserConfig};
pub use error::{ColorParseError, ParseError};
pub use gradient::Gradient;
pub use legacy::{legacy_format, LegacyFormat};
pub use node::{ClickAction, ClickEvent, HoverEvent, TextNode, TextNodeBuilder};
pub use parser::{parse, parse_markup, MAX_REPLACEMENT_DEPTH};
pub use replace::{RecursionPolicy, Replacement, ReplacementRule};
pub use style::{Decoration, Decorations, Style};
