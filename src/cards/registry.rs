//! Card registry: turns a `(tag, options)` pair into card content.
//!
//! Rendering is a pure function of the tag, the options and the username the
//! registry was built with. Each kind reads only its own option fields and
//! substitutes a default for anything missing.

use super::content::{CardContent, Frame, Rendered, Shadow};
use super::{Alignment, CardKind, CardOptions, CardTag, TextStyle};
use url::Url;

/// Background used when a card has no `color` option.
pub const DEFAULT_BACKGROUND: &str = "bg-neutral-700";

/// Base URL of the stats image service used by stats cards.
pub const STATS_IMAGE_BASE: &str = "https://github-readme-stats.vercel.app/api";

pub const DEFAULT_LINK_LABEL: &str = "Link";
pub const DEFAULT_VIEWS_LABEL: &str = "Profile Views";

/// Renders card content for the current user.
///
/// ## Example
///
/// ```
/// use readme_canvas::cards::{CardContent, CardKind, CardOptions, CardRegistry};
///
/// let registry = CardRegistry::new("octocat");
/// let opts = CardOptions::new().with_text("hello");
/// let rendered = registry.render(&CardKind::Text.into(), Some(&opts));
///
/// match rendered.content() {
///     Some(CardContent::Text { text, .. }) => assert_eq!(text, "hello"),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardRegistry {
    username: String,
}

impl CardRegistry {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Render content for `tag`. `None` options means "all defaults".
    ///
    /// Unknown tags, and known kinds without a renderer, yield
    /// `Rendered::Unsupported`; this never fails.
    #[must_use]
    pub fn render(&self, tag: &CardTag, options: Option<&CardOptions>) -> Rendered {
        let defaults = CardOptions::default();
        let opts = options.unwrap_or(&defaults);

        let kind = match tag {
            CardTag::Known(kind) => *kind,
            CardTag::Unknown(raw) => return Rendered::Unsupported(raw.clone()),
        };

        let content = match kind {
            CardKind::Profile => CardContent::Profile {
                title: format!("{}'s Profile", self.username),
                style: text_style(opts),
                avatar_url: non_empty(&opts.image_url),
                frame: frame(opts),
            },
            CardKind::Stats => CardContent::Stats {
                title: format!("GitHub Stats for {}", self.username),
                image_url: stats_image_url(&self.username),
                frame: frame(opts),
            },
            CardKind::Text => CardContent::Text {
                text: opts.text.clone().unwrap_or_default(),
                style: text_style(opts),
                align: opts.align.unwrap_or(Alignment::Left),
                frame: frame(opts),
            },
            CardKind::Markdown => CardContent::Markdown {
                markdown: opts
                    .markdown
                    .clone()
                    .or_else(|| opts.custom_markdown.clone())
                    .unwrap_or_default(),
                frame: frame(opts),
            },
            CardKind::Image => CardContent::Image {
                image_url: opts.image_url.clone().unwrap_or_default(),
                caption: non_empty(&opts.caption),
                border_color: non_empty(&opts.border_color),
                border_radius: non_empty(&opts.border_radius),
                frame: frame(opts),
            },
            CardKind::Link => CardContent::Link {
                label: non_empty(&opts.link_text).unwrap_or_else(|| DEFAULT_LINK_LABEL.to_string()),
                url: opts.link_url.clone().unwrap_or_default(),
                icon: non_empty(&opts.icon),
                frame: frame(opts),
            },
            CardKind::Social => CardContent::Social {
                links: opts.profile_links.clone().unwrap_or_default(),
                frame: frame(opts),
            },
            CardKind::Views => CardContent::Views {
                label: non_empty(&opts.text).unwrap_or_else(|| DEFAULT_VIEWS_LABEL.to_string()),
                count: opts
                    .caption
                    .as_deref()
                    .and_then(|c| c.trim().parse().ok())
                    .unwrap_or(0),
                frame: frame(opts),
            },
            CardKind::Template => return Rendered::Unsupported(kind.as_str().to_string()),
        };

        Rendered::Content(content)
    }
}

fn frame(opts: &CardOptions) -> Frame {
    Frame {
        background: non_empty(&opts.color).unwrap_or_else(|| DEFAULT_BACKGROUND.to_string()),
        shadow: opts.shadow.as_deref().map(Shadow::parse).unwrap_or_default(),
    }
}

fn text_style(opts: &CardOptions) -> TextStyle {
    let fallback = TextStyle::default();
    match &opts.text_style {
        Some(style) => TextStyle {
            size: if style.size.trim().is_empty() { fallback.size } else { style.size.clone() },
            weight: if style.weight.trim().is_empty() { fallback.weight } else { style.weight.clone() },
        },
        None => fallback,
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

/// Stats image for `username`, with every query value form-encoded.
fn stats_image_url(username: &str) -> String {
    let params = [
        ("username", username),
        ("show_icons", "true"),
        ("theme", "radical"),
    ];
    Url::parse_with_params(STATS_IMAGE_BASE, params)
        .map(String::from)
        .unwrap_or_else(|_| STATS_IMAGE_BASE.to_string())
}
