//! Card model: identifiers, kinds, options and the card itself.
//!
//! ## Key Types
//!
//! - `CardId`: session-unique, never reused
//! - `CardKind`: the closed set of card kinds the registry knows about
//! - `CardTag`: a kind, or the raw string of a tag from outside the editor
//! - `CardOptions`: one bag carrying every customization field
//! - `Card`: id, tag, options and the content rendered from them
//!
//! A card's content is private and only ever written by the store together
//! with its options, so the two cannot drift apart.

pub mod content;
pub mod registry;

pub use content::{group_thousands, CardContent, Frame, Rendered, Shadow};
pub use registry::CardRegistry;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a card within one editing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kinds of card the editor offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Profile,
    Stats,
    Text,
    Markdown,
    Image,
    Link,
    Social,
    Views,
    /// Accepted on drop, but there is no renderer for it yet.
    Template,
}

impl CardKind {
    pub const ALL: [CardKind; 9] = [
        CardKind::Profile,
        CardKind::Stats,
        CardKind::Text,
        CardKind::Markdown,
        CardKind::Image,
        CardKind::Link,
        CardKind::Social,
        CardKind::Views,
        CardKind::Template,
    ];

    /// The tag string used on the drag-and-drop boundary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardKind::Profile => "profile",
            CardKind::Stats => "stats",
            CardKind::Text => "text",
            CardKind::Markdown => "markdown",
            CardKind::Image => "image",
            CardKind::Link => "link",
            CardKind::Social => "social",
            CardKind::Views => "views",
            CardKind::Template => "template",
        }
    }

    /// Human readable name shown in the card picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CardKind::Profile => "Profile Card",
            CardKind::Stats => "GitHub Stats",
            CardKind::Text => "Text",
            CardKind::Markdown => "Markdown",
            CardKind::Image => "Image",
            CardKind::Link => "Links",
            CardKind::Social => "Social Media",
            CardKind::Views => "View Counter",
            CardKind::Template => "Templates",
        }
    }

    /// Exact, case-sensitive match against the known tag strings.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }

    /// Kinds whose label contains `term`, ignoring case. An empty term matches all.
    #[must_use]
    pub fn search(term: &str) -> Vec<CardKind> {
        let term = term.to_lowercase();
        Self::ALL
            .into_iter()
            .filter(|k| k.label().to_lowercase().contains(&term))
            .collect()
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type tag stored on a card.
///
/// Tags arrive as strings from drop events, so anything outside `CardKind` is
/// kept verbatim as `Unknown` rather than rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardTag {
    Known(CardKind),
    Unknown(String),
}

impl CardTag {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match CardKind::from_tag(raw) {
            Some(kind) => CardTag::Known(kind),
            None => CardTag::Unknown(raw.to_string()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Option<CardKind> {
        match self {
            CardTag::Known(kind) => Some(*kind),
            CardTag::Unknown(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CardTag::Known(kind) => kind.as_str(),
            CardTag::Unknown(raw) => raw,
        }
    }
}

impl From<CardKind> for CardTag {
    fn from(kind: CardKind) -> Self {
        CardTag::Known(kind)
    }
}

impl From<&str> for CardTag {
    fn from(raw: &str) -> Self {
        CardTag::parse(raw)
    }
}

impl From<String> for CardTag {
    fn from(raw: String) -> Self {
        match CardKind::from_tag(&raw) {
            Some(kind) => CardTag::Known(kind),
            None => CardTag::Unknown(raw),
        }
    }
}

impl From<CardTag> for String {
    fn from(tag: CardTag) -> Self {
        match tag {
            CardTag::Known(kind) => kind.as_str().to_string(),
            CardTag::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for CardTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Font size and weight, both as CSS strings (`"20px"`, `"bold"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: String,
    pub weight: String,
}

impl TextStyle {
    pub fn new(size: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            weight: weight.into(),
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new("16px", "normal")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// One entry of a social links card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

/// Customization fields for every card kind.
///
/// A kind reads only the fields relevant to it; the rest may be set and are
/// ignored. Serialized field names match the editor's JSON (`textStyle`,
/// `imageUrl`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_links: Option<Vec<ProfileLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl CardOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_markdown(mut self, markdown: impl Into<String>) -> Self {
        self.markdown = Some(markdown.into());
        self
    }

    pub fn with_text_style(mut self, size: impl Into<String>, weight: impl Into<String>) -> Self {
        self.text_style = Some(TextStyle::new(size, weight));
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.shadow = Some(shadow.into());
        self
    }

    pub fn with_link(mut self, url: impl Into<String>, label: impl Into<String>) -> Self {
        self.link_url = Some(url.into());
        self.link_text = Some(label.into());
        self
    }

    pub fn with_profile_link(mut self, link: ProfileLink) -> Self {
        self.profile_links.get_or_insert_with(Vec::new).push(link);
        self
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }
}

/// A card on the canvas.
///
/// Only `CardStore` constructs or mutates cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    id: CardId,
    tag: CardTag,
    options: Option<CardOptions>,
    content: Rendered,
}

impl Card {
    pub(crate) fn new(id: CardId, tag: CardTag, content: Rendered) -> Self {
        Self {
            id,
            tag,
            options: None,
            content,
        }
    }

    /// Replace options and content together.
    pub(crate) fn set_options(&mut self, options: CardOptions, content: Rendered) {
        self.options = Some(options);
        self.content = content;
    }

    pub(crate) fn set_content(&mut self, content: Rendered) {
        self.content = content;
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn tag(&self) -> &CardTag {
        &self.tag
    }

    /// `None` until the card is first customized; defaults apply meanwhile.
    #[must_use]
    pub fn options(&self) -> Option<&CardOptions> {
        self.options.as_ref()
    }

    #[must_use]
    pub fn content(&self) -> &Rendered {
        &self.content
    }
}
