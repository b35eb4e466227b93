//! Style types for legacy text.
//!
//! A [`Style`] combines an optional color with a set of tri-state
//! [`Decorations`]: each decoration is explicitly on, explicitly off, or
//! left unset so it inherits from the enclosing node.

use bitflags::bitflags;
use phf::phf_map;

use crate::color::Color;

/// A text decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

impl Decoration {
    /// Every decoration, in rendering order.
    pub const ALL: [Decoration; 5] = [
        Decoration::Obfuscated,
        Decoration::Bold,
        Decoration::Strikethrough,
        Decoration::Underlined,
        Decoration::Italic,
    ];

    /// Look up a decoration by directive name (`bold`, `italics`, `underline`, ...).
    ///
    /// Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        DECORATION_NAMES.get(name).copied()
    }

    /// The canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Decoration::Obfuscated => "obfuscated",
            Decoration::Bold => "bold",
            Decoration::Strikethrough => "strikethrough",
            Decoration::Underlined => "underlined",
            Decoration::Italic => "italic",
        }
    }

    /// Every name accepted by [`Decoration::from_name`].
    pub fn names() -> impl Iterator<Item = &'static str> {
        DECORATION_NAMES.keys().copied()
    }

    fn flag(&self) -> DecorationFlags {
        match self {
            Decoration::Obfuscated => DecorationFlags::OBFUSCATED,
            Decoration::Bold => DecorationFlags::BOLD,
            Decoration::Strikethrough => DecorationFlags::STRIKETHROUGH,
            Decoration::Underlined => DecorationFlags::UNDERLINED,
            Decoration::Italic => DecorationFlags::ITALIC,
        }
    }
}

static DECORATION_NAMES: phf::Map<&'static str, Decoration> = phf_map! {
    "bold" => Decoration::Bold,
    "italic" => Decoration::Italic,
    "italics" => Decoration::Italic,
    "strikethrough" => Decoration::Strikethrough,
    "underlined" => Decoration::Underlined,
    "underline" => Decoration::Underlined,
    "obfuscated" => Decoration::Obfuscated,
};

bitflags! {
    /// Bit set of decorations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub(crate) struct DecorationFlags: u8 {
        const OBFUSCATED    = 0b0000_0001;
        const BOLD          = 0b0000_0010;
        const STRIKETHROUGH = 0b0000_0100;
        const UNDERLINED    = 0b0000_1000;
        const ITALIC        = 0b0001_0000;
    }
}

/// Tri-state decorations.
///
/// `set` records which decorations carry an explicit value; `enabled` holds
/// that value. A decoration absent from `set` is unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Decorations {
    set: DecorationFlags,
    enabled: DecorationFlags,
}

impl Decorations {
    /// No decoration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicit value of a decoration, or `None` when unset.
    pub fn get(&self, decoration: Decoration) -> Option<bool> {
        let flag = decoration.flag();
        self.set
            .contains(flag)
            .then(|| self.enabled.contains(flag))
    }

    /// Give a decoration an explicit value.
    pub fn set(&mut self, decoration: Decoration, value: bool) {
        let flag = decoration.flag();
        self.set.insert(flag);
        self.enabled.set(flag, value);
    }

    /// Builder-style [`Decorations::set`].
    pub fn with(mut self, decoration: Decoration, value: bool) -> Self {
        self.set(decoration, value);
        self
    }

    /// Returns true if no decoration has an explicit value.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Iterate over the explicitly set decorations and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Decoration, bool)> + '_ {
        Decoration::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|value| (d, value)))
    }

    /// Overlay `other` on top of this set; explicit values in `other` win.
    pub fn apply(&self, other: &Decorations) -> Decorations {
        Decorations {
            set: self.set | other.set,
            enabled: (self.enabled & !other.set) | (other.enabled & other.set),
        }
    }
}

/// Color plus decorations, as carried by a style placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Text color.
    pub color: Option<Color>,
    /// Decorations.
    pub decorations: Decorations,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A style that only sets a color.
    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            decorations: Decorations::new(),
        }
    }

    /// Builder-style color setter.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder-style decoration setter (explicitly enabled).
    pub fn decorated(mut self, decoration: Decoration) -> Self {
        self.decorations.set(decoration, true);
        self
    }

    /// Returns true if neither a color nor any decoration is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.decorations.is_empty()
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Style::color(color)
    }
}

impl From<Decoration> for Style {
    fn from(decoration: Decoration) -> Self {
        Style::new().decorated(decoration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoration_names() {
        assert_eq!(Decoration::from_name("bold"), Some(Decoration::Bold));
        assert_eq!(Decoration::from_name("italics"), Some(Decoration::Italic));
        assert_eq!(Decoration::from_name("underline"), Some(Decoration::Underlined));
        assert_eq!(Decoration::from_name("Bold"), None);
        assert_eq!(Decoration::names().count(), 7);
    }

    #[test]
    fn tri_state() {
        let mut decorations = Decorations::new();
        assert_eq!(decorations.get(Decoration::Bold), None);

        decorations.set(Decoration::Bold, false);
        assert_eq!(decorations.get(Decoration::Bold), Some(false));
        assert!(!decorations.is_empty());

        decorations.set(Decoration::Bold, true);
        assert_eq!(decorations.get(Decoration::Bold), Some(true));
        assert_eq!(decorations.get(Decoration::Italic), None);
    }

    #[test]
    fn apply_overrides_explicit_values() {
        let base = Decorations::new()
            .with(Decoration::Bold, true)
            .with(Decoration::Italic, true);
        let top = Decorations::new().with(Decoration::Bold, false);

        let merged = base.apply(&top);
        assert_eq!(merged.get(Decoration::Bold), Some(false));
        assert_eq!(merged.get(Decoration::Italic), Some(true));
        assert_eq!(merged.get(Decoration::Underlined), None);
    }

    #[test]
    fn iter_in_order() {
        let decorations = Decorations::new()
            .with(Decoration::Italic, true)
            .with(Decoration::Bold, false);
        let items: Vec<_> = decorations.iter().collect();
        assert_eq!(
            items,
            vec![(Decoration::Bold, false), (Decoration::Italic, true)]
        );
    }

    #[test]
    fn style_from_parts() {
        let style = Style::from(Decoration::Bold);
        assert_eq!(style.decorations.get(Decoration::Bold), Some(true));
        assert!(style.color.is_none());
        assert!(Style::new().is_empty());
    }
}
