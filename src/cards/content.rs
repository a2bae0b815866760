//! Resolved card content.
//!
//! Every field here is already defaulted, so consumers (the canvas, the
//! README exporter) never deal with missing values.

use super::{Alignment, ProfileLink, TextStyle};
use serde::Serialize;

/// Shadow intensity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    None,
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl Shadow {
    /// Accepts both the CSS utility names (`shadow-lg`) and plain names
    /// (`large`). Anything else falls back to the default.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let name = raw.trim().strip_prefix("shadow-").unwrap_or(raw.trim());
        match name {
            "none" => Shadow::None,
            "sm" | "small" => Shadow::Small,
            "md" | "medium" => Shadow::Medium,
            "lg" | "large" => Shadow::Large,
            "xl" | "extra-large" => Shadow::ExtraLarge,
            _ => Shadow::default(),
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Shadow::None => "shadow-none",
            Shadow::Small => "shadow-sm",
            Shadow::Medium => "shadow-md",
            Shadow::Large => "shadow-lg",
            Shadow::ExtraLarge => "shadow-xl",
        }
    }
}

/// Presentation shared by most card kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Frame {
    pub background: String,
    pub shadow: Shadow,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardContent {
    Profile {
        title: String,
        style: TextStyle,
        avatar_url: Option<String>,
        frame: Frame,
    },
    Stats {
        title: String,
        image_url: String,
        frame: Frame,
    },
    Text {
        text: String,
        style: TextStyle,
        align: Alignment,
        frame: Frame,
    },
    Markdown {
        markdown: String,
        frame: Frame,
    },
    Image {
        image_url: String,
        caption: Option<String>,
        border_color: Option<String>,
        border_radius: Option<String>,
        frame: Frame,
    },
    Link {
        label: String,
        url: String,
        icon: Option<String>,
        frame: Frame,
    },
    Social {
        links: Vec<ProfileLink>,
        frame: Frame,
    },
    Views {
        label: String,
        count: u64,
        frame: Frame,
    },
}

impl CardContent {
    #[must_use]
    pub fn frame(&self) -> &Frame {
        match self {
            CardContent::Profile { frame, .. }
            | CardContent::Stats { frame, .. }
            | CardContent::Text { frame, .. }
            | CardContent::Markdown { frame, .. }
            | CardContent::Image { frame, .. }
            | CardContent::Link { frame, .. }
            | CardContent::Social { frame, .. }
            | CardContent::Views { frame, .. } => frame,
        }
    }
}

/// Output of the registry for one `(tag, options)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "content", rename_all = "lowercase")]
pub enum Rendered {
    Content(CardContent),
    /// No renderer for this tag; the raw tag is kept for diagnostics.
    Unsupported(String),
}

impl Rendered {
    #[must_use]
    pub fn content(&self) -> Option<&CardContent> {
        match self {
            Rendered::Content(c) => Some(c),
            Rendered::Unsupported(_) => None,
        }
    }

    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Rendered::Unsupported(_))
    }
}

/// `1234567` -> `"1,234,567"`
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_accepts_css_and_plain_names() {
        assert_eq!(Shadow::parse("shadow-lg"), Shadow::Large);
        assert_eq!(Shadow::parse("large"), Shadow::Large);
        assert_eq!(Shadow::parse("shadow-none"), Shadow::None);
        assert_eq!(Shadow::parse("xl"), Shadow::ExtraLarge);
        assert_eq!(Shadow::parse("glowing"), Shadow::Medium);
        assert_eq!(Shadow::Small.css_class(), "shadow-sm");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
