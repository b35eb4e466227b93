//! Legacy single-character format codes (`&c`, `&l`, `&r`, ...).

use phf::phf_map;

use crate::color::{named, Color};
use crate::style::Decoration;

/// What a legacy format code does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegacyFormat {
    Color(Color),
    Decoration(Decoration),
    /// Clear color, decorations, gradient and events.
    Reset,
}

static LEGACY_CODES: phf::Map<char, LegacyFormat> = phf_map! {
    '0' => LegacyFormat::Color(named::BLACK),
    '1' => LegacyFormat::Color(named::DARK_BLUE),
    '2' => LegacyFormat::Color(named::DARK_GREEN),
    '3' => LegacyFormat::Color(named::DARK_AQUA),
    '4' => LegacyFormat::Color(named::DARK_RED),
    '5' => LegacyFormat::Color(named::DARK_PURPLE),
    '6' => LegacyFormat::Color(named::GOLD),
    '7' => LegacyFormat::Color(named::GRAY),
    '8' => LegacyFormat::Color(named::DARK_GRAY),
    '9' => LegacyFormat::Color(named::BLUE),
    'a' => LegacyFormat::Color(named::GREEN),
    'b' => LegacyFormat::Color(named::AQUA),
    'c' => LegacyFormat::Color(named::RED),
    'd' => LegacyFormat::Color(named::LIGHT_PURPLE),
    'e' => LegacyFormat::Color(named::YELLOW),
    'f' => LegacyFormat::Color(named::WHITE),
    'k' => LegacyFormat::Decoration(Decoration::Obfuscated),
    'l' => LegacyFormat::Decoration(Decoration::Bold),
    'm' => LegacyFormat::Decoration(Decoration::Strikethrough),
    'n' => LegacyFormat::Decoration(Decoration::Underlined),
    'o' => LegacyFormat::Decoration(Decoration::Italic),
    'r' => LegacyFormat::Reset,
};

/// Look up the format for a code character, ignoring ASCII case.
pub fn legacy_format(code: char) -> Option<LegacyFormat> {
    LEGACY_CODES.get(&code.to_ascii_lowercase()).copied()
}
