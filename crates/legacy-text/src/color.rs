//! Color types and lookup for legacy text markup.
//!
//! A color token can be a bare name, a namespaced name, or a hex string:
//!
//! - `red`: the Minecraft named palette first, then CSS, then hex
//! - `minecraft:red`: only the named palette
//! - `css:red`: only the CSS Level 4 table
//! - `hex:f00`, `#ff0000`: only hex (`#` optional, 3 or 6 digits)

use std::fmt;

use phf::phf_map;

use crate::error::ColorParseError;

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Color {
    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// The packed `0xRRGGBB` value.
    pub const fn value(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a color token, with an optional `namespace:` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use legacy_text::Color;
    ///
    /// assert_eq!(Color::parse("red").unwrap(), Color::from_hex(0xff5555));
    /// assert_eq!(Color::parse("css:red").unwrap(), Color::from_hex(0xff0000));
    /// assert_eq!(Color::parse("#f00").unwrap(), Color::from_hex(0xff0000));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let (namespace, name) = match input.split_once(':') {
            Some((ns, name)) => {
                let ns = ColorNamespace::from_name(ns)
                    .ok_or_else(|| ColorParseError::UnknownNamespace(ns.to_string()))?;
                (Some(ns), name)
            }
            None => (None, input),
        };

        if namespace == Some(ColorNamespace::Hex) {
            return Self::parse_hex(name);
        }
        resolve_color(namespace, name)
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }

    /// Parse a hex color, with or without a leading `#`.
    ///
    /// Accepts exactly 3 or 6 hex digits in either case. The 3-digit form
    /// repeats each digit (`f00` is `ff0000`).
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        let invalid = || ColorParseError::InvalidHex(input.to_string());

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            3 => {
                let r = (value >> 8) & 0xf;
                let g = (value >> 4) & 0xf;
                let b = value & 0xf;
                Ok(Color::rgb((r * 17) as u8, (g * 17) as u8, (b * 17) as u8))
            }
            6 => Ok(Color::from_hex(value)),
            _ => Err(invalid()),
        }
    }

    /// Look up a Minecraft named color (`dark_red`, `gold`, ...).
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Look up a CSS Level 4 color name.
    pub fn css(name: &str) -> Option<Self> {
        CSS_COLORS.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Linear interpolation towards `other`, truncating each channel.
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.value())
    }
}

/// The lookup table a color token is restricted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorNamespace {
    /// The 16 named Minecraft colors.
    Minecraft,
    /// CSS Level 4 named colors.
    Css,
    /// Hex digits only.
    Hex,
}

impl ColorNamespace {
    /// Parse a namespace prefix. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "minecraft" => Some(ColorNamespace::Minecraft),
            "css" => Some(ColorNamespace::Css),
            "hex" => Some(ColorNamespace::Hex),
            _ => None,
        }
    }
}

/// Resolve a color token in the permitted namespace(s).
///
/// With no namespace, the named palette wins over CSS, and hex is only
/// tried after both name lookups miss. Returns `None` when nothing matches.
pub fn resolve_color(namespace: Option<ColorNamespace>, name: &str) -> Option<Color> {
    let any = namespace.is_none();

    if any || namespace == Some(ColorNamespace::Minecraft) {
        if let Some(color) = Color::named(name) {
            return Some(color);
        }
    }
    if any || namespace == Some(ColorNamespace::Css) {
        if let Some(color) = Color::css(name) {
            return Some(color);
        }
    }
    if any || namespace == Some(ColorNamespace::Hex) {
        return Color::parse_hex(name).ok();
    }
    None
}

/// The 16 named Minecraft colors.
pub mod named {
    use super::Color;

    pub const BLACK: Color = Color::from_hex(0x000000);
    pub const DARK_BLUE: Color = Color::from_hex(0x0000aa);
    pub const DARK_GREEN: Color = Color::from_hex(0x00aa00);
    pub const DARK_AQUA: Color = Color::from_hex(0x00aaaa);
    pub const DARK_RED: Color = Color::from_hex(0xaa0000);
    pub const DARK_PURPLE: Color = Color::from_hex(0xaa00aa);
    pub const GOLD: Color = Color::from_hex(0xffaa00);
    pub const GRAY: Color = Color::from_hex(0xaaaaaa);
    pub const DARK_GRAY: Color = Color::from_hex(0x555555);
    pub const BLUE: Color = Color::from_hex(0x5555ff);
    pub const GREEN: Color = Color::from_hex(0x55ff55);
    pub const AQUA: Color = Color::from_hex(0x55ffff);
    pub const RED: Color = Color::from_hex(0xff5555);
    pub const LIGHT_PURPLE: Color = Color::from_hex(0xff55ff);
    pub const YELLOW: Color = Color::from_hex(0xffff55);
    pub const WHITE: Color = Color::from_hex(0xffffff);
}

static NAMED_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "black" => named::BLACK,
    "dark_blue" => named::DARK_BLUE,
    "dark_green" => named::DARK_GREEN,
    "dark_aqua" => named::DARK_AQUA,
    "dark_red" => named::DARK_RED,
    "dark_purple" => named::DARK_PURPLE,
    "gold" => named::GOLD,
    "gray" => named::GRAY,
    "dark_gray" => named::DARK_GRAY,
    "blue" => named::BLUE,
    "green" => named::GREEN,
    "aqua" => named::AQUA,
    "red" => named::RED,
    "light_purple" => named::LIGHT_PURPLE,
    "yellow" => named::YELLOW,
    "white" => named::WHITE,
};

// CSS Color Module Level 4 named colors.
static CSS_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "aliceblue" => Color::from_hex(0xf0f8ff),
    "antiquewhite" => Color::from_hex(0xfaebd7),
    "aqua" => Color::from_hex(0x00ffff),
    "aquamarine" => Color::from_hex(0x7fffd4),
    "azure" => Color::from_hex(0xf0ffff),
    "beige" => Color::from_hex(0xf5f5dc),
    "bisque" => Color::from_hex(0xffe4c4),
    "black" => Color::from_hex(0x000000),
    "blanchedalmond" => Color::from_hex(0xffebcd),
    "blue" => Color::from_hex(0x0000ff),
    "blueviolet" => Color::from_hex(0x8a2be2),
    "brown" => Color::from_hex(0xa52a2a),
    "burlywood" => Color::from_hex(0xdeb887),
    "cadetblue" => Color::from_hex(0x5f9ea0),
    "chartreuse" => Color::from_hex(0x7fff00),
    "chocolate" => Color::from_hex(0xd2691e),
    "coral" => Color::from_hex(0xff7f50),
    "cornflowerblue" => Color::from_hex(0x6495ed),
    "cornsilk" => Color::from_hex(0xfff8dc),
    "crimson" => Color::from_hex(0xdc143c),
    "cyan" => Color::from_hex(0x00ffff),
    "darkblue" => Color::from_hex(0x00008b),
    "darkcyan" => Color::from_hex(0x008b8b),
    "darkgoldenrod" => Color::from_hex(0xb8860b),
    "darkgray" => Color::from_hex(0xa9a9a9),
    "darkgreen" => Color::from_hex(0x006400),
    "darkgrey" => Color::from_hex(0xa9a9a9),
    "darkkhaki" => Color::from_hex(0xbdb76b),
    "darkmagenta" => Color::from_hex(0x8b008b),
    "darkolivegreen" => Color::from_hex(0x556b2f),
    "darkorange" => Color::from_hex(0xff8c00),
    "darkorchid" => Color::from_hex(0x9932cc),
    "darkred" => Color::from_hex(0x8b0000),
    "darksalmon" => Color::from_hex(0xe9967a),
    "darkseagreen" => Color::from_hex(0x8fbc8f),
    "darkslateblue" => Color::from_hex(0x483d8b),
    "darkslategray" => Color::from_hex(0x2f4f4f),
    "darkslategrey" => Color::from_hex(0x2f4f4f),
    "darkturquoise" => Color::from_hex(0x00ced1),
    "darkviolet" => Color::from_hex(0x9400d3),
    "deeppink" => Color::from_hex(0xff1493),
    "deepskyblue" => Color::from_hex(0x00bfff),
    "dimgray" => Color::from_hex(0x696969),
    "dimgrey" => Color::from_hex(0x696969),
    "dodgerblue" => Color::from_hex(0x1e90ff),
    "firebrick" => Color::from_hex(0xb22222),
    "floralwhite" => Color::from_hex(0xfffaf0),
    "forestgreen" => Color::from_hex(0x228b22),
    "fuchsia" => Color::from_hex(0xff00ff),
    "gainsboro" => Color::from_hex(0xdcdcdc),
    "ghostwhite" => Color::from_hex(0xf8f8ff),
    "goldenrod" => Color::from_hex(0xdaa520),
    "gold" => Color::from_hex(0xffd700),
    "gray" => Color::from_hex(0x808080),
    "green" => Color::from_hex(0x008000),
    "greenyellow" => Color::from_hex(0xadff2f),
    "grey" => Color::from_hex(0x808080),
    "honeydew" => Color::from_hex(0xf0fff0),
    "hotpink" => Color::from_hex(0xff69b4),
    "indianred" => Color::from_hex(0xcd5c5c),
    "indigo" => Color::from_hex(0x4b0082),
    "ivory" => Color::from_hex(0xfffff0),
    "khaki" => Color::from_hex(0xf0e68c),
    "lavenderblush" => Color::from_hex(0xfff0f5),
    "lavender" => Color::from_hex(0xe6e6fa),
    "lawngreen" => Color::from_hex(0x7cfc00),
    "lemonchiffon" => Color::from_hex(0xfffacd),
    "lightblue" => Color::from_hex(0xadd8e6),
    "lightcoral" => Color::from_hex(0xf08080),
    "lightcyan" => Color::from_hex(0xe0ffff),
    "lightgoldenrodyellow" => Color::from_hex(0xfafad2),
    "lightgray" => Color::from_hex(0xd3d3d3),
    "lightgreen" => Color::from_hex(0x90ee90),
    "lightgrey" => Color::from_hex(0xd3d3d3),
    "lightpink" => Color::from_hex(0xffb6c1),
    "lightsalmon" => Color::from_hex(0xffa07a),
    "lightseagreen" => Color::from_hex(0x20b2aa),
    "lightskyblue" => Color::from_hex(0x87cefa),
    "lightslategray" => Color::from_hex(0x778899),
    "lightslategrey" => Color::from_hex(0x778899),
    "lightsteelblue" => Color::from_hex(0xb0c4de),
    "lightyellow" => Color::from_hex(0xffffe0),
    "lime" => Color::from_hex(0x00ff00),
    "limegreen" => Color::from_hex(0x32cd32),
    "linen" => Color::from_hex(0xfaf0e6),
    "magenta" => Color::from_hex(0xff00ff),
    "maroon" => Color::from_hex(0x800000),
    "mediumaquamarine" => Color::from_hex(0x66cdaa),
    "mediumblue" => Color::from_hex(0x0000cd),
    "mediumorchid" => Color::from_hex(0xba55d3),
    "mediumpurple" => Color::from_hex(0x9370db),
    "mediumseagreen" => Color::from_hex(0x3cb371),
    "mediumslateblue" => Color::from_hex(0x7b68ee),
    "mediumspringgreen" => Color::from_hex(0x00fa9a),
    "mediumturquoise" => Color::from_hex(0x48d1cc),
    "mediumvioletred" => Color::from_hex(0xc71585),
    "midnightblue" => Color::from_hex(0x191970),
    "mintcream" => Color::from_hex(0xf5fffa),
    "mistyrose" => Color::from_hex(0xffe4e1),
    "moccasin" => Color::from_hex(0xffe4b5),
    "navajowhite" => Color::from_hex(0xffdead),
    "navy" => Color::from_hex(0x000080),
    "oldlace" => Color::from_hex(0xfdf5e6),
    "olive" => Color::from_hex(0x808000),
    "olivedrab" => Color::from_hex(0x6b8e23),
    "orange" => Color::from_hex(0xffa500),
    "orangered" => Color::from_hex(0xff4500),
    "orchid" => Color::from_hex(0xda70d6),
    "palegoldenrod" => Color::from_hex(0xeee8aa),
    "palegreen" => Color::from_hex(0x98fb98),
    "paleturquoise" => Color::from_hex(0xafeeee),
    "palevioletred" => Color::from_hex(0xdb7093),
    "papayawhip" => Color::from_hex(0xffefd5),
    "peachpuff" => Color::from_hex(0xffdab9),
    "peru" => Color::from_hex(0xcd853f),
    "pink" => Color::from_hex(0xffc0cb),
    "plum" => Color::from_hex(0xdda0dd),
    "powderblue" => Color::from_hex(0xb0e0e6),
    "purple" => Color::from_hex(0x800080),
    "rebeccapurple" => Color::from_hex(0x663399),
    "red" => Color::from_hex(0xff0000),
    "rosybrown" => Color::from_hex(0xbc8f8f),
    "royalblue" => Color::from_hex(0x4169e1),
    "saddlebrown" => Color::from_hex(0x8b4513),
    "salmon" => Color::from_hex(0xfa8072),
    "sandybrown" => Color::from_hex(0xf4a460),
    "seagreen" => Color::from_hex(0x2e8b57),
    "seashell" => Color::from_hex(0xfff5ee),
    "sienna" => Color::from_hex(0xa0522d),
    "silver" => Color::from_hex(0xc0c0c0),
    "skyblue" => Color::from_hex(0x87ceeb),
    "slateblue" => Color::from_hex(0x6a5acd),
    "slategray" => Color::from_hex(0x708090),
    "slategrey" => Color::from_hex(0x708090),
    "snow" => Color::from_hex(0xfffafa),
    "springgreen" => Color::from_hex(0x00ff7f),
    "steelblue" => Color::from_hex(0x4682b4),
    "tan" => Color::from_hex(0xd2b48c),
    "teal" => Color::from_hex(0x008080),
    "thistle" => Color::from_hex(0xd8bfd8),
    "tomato" => Color::from_hex(0xff6347),
    "turquoise" => Color::from_hex(0x40e0d0),
    "violet" => Color::from_hex(0xee82ee),
    "wheat" => Color::from_hex(0xf5deb3),
    "white" => Color::from_hex(0xffffff),
    "whitesmoke" => Color::from_hex(0xf5f5f5),
    "yellow" => Color::from_hex(0xffff00),
    "yellowgreen" => Color::from_hex(0x9acd32),
};
