//! README markdown export.
//!
//! Cards are written in canvas order, one block each, separated by a blank
//! line. GitHub strips inline styles, so only what survives its sanitizer is
//! emitted: headings, images, links, emphasis and `align` attributes.

use crate::cards::{group_thousands, Alignment, Card, CardContent, TextStyle};

/// Render `cards` as a README body. Unsupported cards and cards with nothing
/// to show (an image without a URL, say) are skipped.
#[must_use]
pub fn to_markdown(cards: &[Card]) -> String {
    let blocks: Vec<String> = cards
        .iter()
        .filter_map(|card| card.content().content())
        .filter_map(content_to_markdown)
        .collect();

    let mut out = blocks.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Markdown for a single piece of content, if it has any.
///
/// User values are escaped for the context they land in: inline markdown
/// for text and labels, link targets for URLs, HTML for anything inside a tag.
#[must_use]
pub fn content_to_markdown(content: &CardContent) -> Option<String> {
    match content {
        CardContent::Profile { title, avatar_url, .. } => {
            let mut block = format!("## {}", escape_inline(title));
            if let Some(url) = avatar_url {
                block.push_str(&format!(
                    "\n\n<img src=\"{}\" alt=\"Profile\" width=\"96\" />",
                    escape_html(url)
                ));
            }
            Some(block)
        }
        CardContent::Stats { title, image_url, .. } => Some(format!(
            "![{}]({})",
            escape_inline(title),
            link_target(image_url)
        )),
        CardContent::Text { text, style, align, .. } => {
            if text.trim().is_empty() {
                return None;
            }
            let bold = is_bold(style);
            Some(match align {
                Alignment::Left if bold => format!("**{}**", escape_inline(text)),
                Alignment::Left => escape_inline(text),
                other => {
                    let body = if bold {
                        format!("<b>{}</b>", escape_html(text))
                    } else {
                        escape_html(text)
                    };
                    format!("<p align=\"{}\">{}</p>", other.as_str(), body)
                }
            })
        }
        CardContent::Markdown { markdown, .. } => {
            // Raw markdown is the point of this card
            let trimmed = markdown.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        CardContent::Image { image_url, caption, .. } => {
            if image_url.is_empty() {
                return None;
            }
            let alt = caption.as_deref().unwrap_or("Image");
            let mut block = format!("![{}]({})", escape_inline(alt), link_target(image_url));
            if let Some(caption) = caption {
                block.push_str(&format!("\n\n<sub>{}</sub>", escape_html(caption)));
            }
            Some(block)
        }
        CardContent::Link { label, url, .. } => {
            if url.is_empty() {
                return None;
            }
            Some(format!("[{}]({})", escape_inline(label), link_target(url)))
        }
        CardContent::Social { links, .. } => {
            if links.is_empty() {
                return None;
            }
            let items: Vec<String> = links
                .iter()
                .map(|l| format!("[{}]({})", escape_inline(&l.platform), link_target(&l.url)))
                .collect();
            Some(items.join(" · "))
        }
        CardContent::Views { label, count, .. } => Some(format!(
            "**{}:** {}",
            escape_inline(label),
            group_thousands(*count)
        )),
    }
}

fn is_bold(style: &TextStyle) -> bool {
    matches!(
        style.weight.as_str(),
        "bold" | "bolder" | "600" | "700" | "800" | "900"
    )
}

/// Escape text placed inside an HTML element or a quoted attribute.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text rendered as inline markdown: link text, alt text, headings
/// and paragraphs. Markdown punctuation is backslash-escaped and HTML is
/// neutralized.
fn escape_inline(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' | '[' | ']' | '*' | '_' | '`' => {
                out.push('\\');
                out.push(ch);
            }
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encode the characters that would end or split a markdown link
/// destination.
fn link_target(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for ch in url.trim().chars() {
        match ch {
            ' ' => out.push_str("%20"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '"' => out.push_str("%22"),
            c if c.is_whitespace() => {}
            _ => out.push(ch),
        }
    }
    out
}
