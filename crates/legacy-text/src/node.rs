//! The styled text tree produced by the parser.
//!
//! A [`TextNode`] renders its own `content` first, then its `children` in
//! order. Children inherit the style and events of their parent unless
//! they override them.

use std::fmt;

use crate::color::Color;
use crate::style::{Decoration, Decorations, Style};

/// Action performed when a node is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

impl ClickAction {
    /// Actions accepted by `[click:...]` directives. `open_file` is
    /// client-only and never accepted from markup.
    pub const ACCEPTED: [ClickAction; 5] = [
        ClickAction::OpenUrl,
        ClickAction::RunCommand,
        ClickAction::SuggestCommand,
        ClickAction::ChangePage,
        ClickAction::CopyToClipboard,
    ];

    /// The action keyword.
    pub fn name(&self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }

    /// Find an accepted action by keyword, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ACCEPTED
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(name))
    }
}

/// A click action and its verbatim value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenUrl, url)
    }

    pub fn run_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::RunCommand, command)
    }

    pub fn suggest_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::SuggestCommand, command)
    }
}

/// Content shown while hovering over a node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverEvent {
    /// Show a styled text tree.
    ShowText(Box<TextNode>),
}

impl HoverEvent {
    pub fn show_text(node: TextNode) -> Self {
        HoverEvent::ShowText(Box::new(node))
    }
}

/// A node in the styled text tree.
///
/// # Examples
///
/// ```
/// use legacy_text::{TextNode, Decoration};
///
/// let node = TextNode::text("Hello")
///     .decorate(Decoration::Bold)
///     .child(TextNode::text(" World"));
/// assert_eq!(node.plain_text(), "Hello World");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextNode {
    /// Literal text rendered before the children.
    pub content: String,
    /// Text color.
    pub color: Option<Color>,
    /// Tri-state decorations.
    pub decorations: Decorations,
    /// Click behavior.
    pub click: Option<ClickEvent>,
    /// Hover behavior.
    pub hover: Option<HoverEvent>,
    /// Text inserted into the chat input on shift-click.
    pub insertion: Option<String>,
    /// Child nodes, rendered after `content`.
    pub children: Vec<TextNode>,
}

impl TextNode {
    /// An empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// A node with the given content and nothing else.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Start building a node.
    pub fn builder() -> TextNodeBuilder {
        TextNodeBuilder::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Explicitly enable a decoration.
    pub fn decorate(self, decoration: Decoration) -> Self {
        self.decoration(decoration, true)
    }

    /// Give a decoration an explicit value.
    pub fn decoration(mut self, decoration: Decoration, value: bool) -> Self {
        self.decorations.set(decoration, value);
        self
    }

    pub fn click(mut self, click: ClickEvent) -> Self {
        self.click = Some(click);
        self
    }

    pub fn hover(mut self, hover: HoverEvent) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn insertion(mut self, insertion: impl Into<String>) -> Self {
        self.insertion = Some(insertion.into());
        self
    }

    /// Append a child.
    pub fn child(mut self, child: TextNode) -> Self {
        self.children.push(child);
        self
    }

    /// Apply a style on top of this node's own.
    pub fn style(mut self, style: Style) -> Self {
        if style.color.is_some() {
            self.color = style.color;
        }
        self.decorations = self.decorations.apply(&style.decorations);
        self
    }

    /// Returns true if the node has no content, style, events, insertion
    /// or children. Such nodes are never emitted by the parser.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
            && self.color.is_none()
            && self.decorations.is_empty()
            && self.click.is_none()
            && self.hover.is_none()
            && self.insertion.is_none()
            && self.children.is_empty()
    }

    /// Returns true if the node renders any text of its own or has children.
    pub fn has_body(&self) -> bool {
        !self.content.is_empty() || !self.children.is_empty()
    }

    /// The rendered text with all styling dropped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        out.push_str(&self.content);
        for child in &self.children {
            child.write_plain(out);
        }
    }
}

/// One-line tree rendering: `{"content" #rrggbb bold !italic [children]}`.
impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}", self.content)?;
        if let Some(color) = &self.color {
            write!(f, " {}", color)?;
        }
        for (decoration, value) in self.decorations.iter() {
            let bang = if value { "" } else { "!" };
            write!(f, " {}{}", bang, decoration.name())?;
        }
        if let Some(click) = &self.click {
            write!(f, " click={}:{:?}", click.action.name(), click.value)?;
        }
        if let Some(HoverEvent::ShowText(text)) = &self.hover {
            write!(f, " hover={}", text)?;
        }
        if let Some(insertion) = &self.insertion {
            write!(f, " insert={:?}", insertion)?;
        }
        if !self.children.is_empty() {
            write!(f, " [")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}

/// Fluent construction of a [`TextNode`].
///
/// Also accepted as a replacement value, in which case the built node is
/// spliced in like any other sub-tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextNodeBuilder {
    node: TextNode,
}

impl TextNodeBuilder {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.node.content = content.into();
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.node.color = Some(color);
        self
    }

    pub fn decoration(mut self, decoration: Decoration, value: bool) -> Self {
        self.node.decorations.set(decoration, value);
        self
    }

    pub fn click(mut self, click: ClickEvent) -> Self {
        self.node.click = Some(click);
        self
    }

    pub fn hover(mut self, hover: HoverEvent) -> Self {
        self.node.hover = Some(hover);
        self
    }

    pub fn insertion(mut self, insertion: impl Into<String>) -> Self {
        self.node.insertion = Some(insertion.into());
        self
    }

    pub fn append(mut self, child: impl Into<TextNode>) -> Self {
        self.node.children.push(child.into());
        self
    }

    pub fn build(self) -> TextNode {
        self.node
    }
}

impl From<TextNodeBuilder> for TextNode {
    fn from(builder: TextNodeBuilder) -> Self {
        builder.build()
    }
}
