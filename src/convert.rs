//! Paragraph-to-HTML mapping.
//!
//! | Style name prefix | Output                           |
//! |-------------------|----------------------------------|
//! | `Heading`         | `<hN>` from the trailing digits  |
//! | `List`            | `<li>` inside a `<ul>` run       |
//! | anything else     | `<p>`                            |
//!
//! Consecutive list paragraphs share a single `<ul>` container. Every
//! paragraph contributes one line to the body, blank ones included.

use crate::{docx::Paragraph, utils::xml::escape_html};
use thiserror::Error;

const HEADING_PREFIX: &str = "Heading";
const LIST_PREFIX: &str = "List";
const MAX_HEADING_LEVEL: u8 = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("cannot read a heading level from style `{0}`")]
    HeadingLevel(String),
}

/// HTML element a paragraph maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading(u8),
    ListItem,
    Paragraph,
}

impl BlockKind {
    /// Classify a paragraph by its style name.
    pub fn from_style(style: &str) -> Result<Self, ConvertError> {
        if style.starts_with(HEADING_PREFIX) {
            heading_level(style).map(Self::Heading)
        } else if is_list_style(style) {
            Ok(Self::ListItem)
        } else {
            Ok(Self::Paragraph)
        }
    }
}

#[inline]
fn is_list_style(style: &str) -> bool {
    style.starts_with(LIST_PREFIX)
}

/// Level from the trailing digits of a heading style (`Heading 2` → 2).
///
/// Levels past 6 render as `<h6>`; a missing digit or level 0 is an error.
fn heading_level(style: &str) -> Result<u8, ConvertError> {
    let stem = style.trim_end_matches(|c: char| c.is_ascii_digit());
    let level = style[stem.len()..].trim_start_matches('0');
    if level.is_empty() {
        return Err(ConvertError::HeadingLevel(style.to_owned()));
    }

    // any digit run too long for u8 is past the last level anyway
    Ok(level
        .parse::<u8>()
        .map_or(MAX_HEADING_LEVEL, |level| level.min(MAX_HEADING_LEVEL)))
}

/// Convert one paragraph to an HTML fragment.
///
/// Blank paragraphs produce an empty string, whatever their style.
pub fn paragraph_to_html(paragraph: &Paragraph, escape: bool) -> Result<String, ConvertError> {
    let text = paragraph.text.trim();
    if text.is_empty() {
        return Ok(String::new());
    }

    let text = escape_html(text, escape);
    let html = match BlockKind::from_style(&paragraph.style)? {
        BlockKind::Heading(level) => format!("<h{level}>{text}</h{level}>"),
        BlockKind::ListItem => format!("<li>{text}</li>"),
        BlockKind::Paragraph => format!("<p>{text}</p>"),
    };
    Ok(html)
}

/// Convert all paragraphs into the post body, grouping list runs into `<ul>`.
pub fn render_body(paragraphs: &[Paragraph], escape: bool) -> Result<String, ConvertError> {
    let mut body = String::new();
    let mut in_list = false;

    for paragraph in paragraphs {
        let is_item = is_list_style(&paragraph.style);
        if is_item && !in_list {
            body.push_str("<ul>\n");
        } else if !is_item && in_list {
            body.push_str("</ul>\n");
        }
        in_list = is_item;

        body.push_str(&paragraph_to_html(paragraph, escape)?);
        body.push('\n');
    }

    if in_list {
        body.push_str("</ul>\n");
    }

    Ok(body)
}
