//! Paragraph style table from `word/styles.xml`.
//!
//! Paragraphs reference styles by id (`Heading1`, `ListBullet`); the
//! converter works on display names (`Heading 1`, `List Bullet`).

use super::error::DocxError;
use crate::utils::xml::{attr_value, create_xml_reader};
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

/// Name used when the package declares no default paragraph style.
pub const FALLBACK_STYLE: &str = "Normal";

const STYLES_PART: &str = "word/styles.xml";

/// Paragraph style id → display name lookup.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    names: HashMap<String, String>,
    default: Option<String>,
}

/// Style being collected between `<w:style>` and `</w:style>`.
struct PendingStyle {
    id: String,
    name: Option<String>,
    default: bool,
}

impl StyleMap {
    /// Parse the paragraph styles of a `styles.xml` part.
    pub fn parse(xml: &[u8]) -> Result<Self, DocxError> {
        let mut reader = create_xml_reader(xml);
        let mut map = Self::default();
        let mut pending: Option<PendingStyle> = None;

        loop {
            match reader
                .read_event()
                .map_err(|err| DocxError::Xml(STYLES_PART, err))?
            {
                Event::Start(e) => {
                    if e.local_name().as_ref() == b"style" {
                        pending = PendingStyle::from_elem(&e);
                    } else if let Some(style) = pending.as_mut() {
                        style.visit(&e);
                    }
                }
                Event::Empty(e) => {
                    if e.local_name().as_ref() == b"style" {
                        if let Some(style) = PendingStyle::from_elem(&e) {
                            map.insert(style);
                        }
                    } else if let Some(style) = pending.as_mut() {
                        style.visit(&e);
                    }
                }
                Event::End(e) if e.local_name().as_ref() == b"style" => {
                    if let Some(style) = pending.take() {
                        map.insert(style);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(map)
    }

    fn insert(&mut self, style: PendingStyle) {
        let name = style
            .name
            .map(|name| ui_name(&name))
            .unwrap_or_else(|| style.id.clone());
        // the last default declared wins
        if style.default {
            self.default = Some(name.clone());
        }
        self.names.insert(style.id, name);
    }

    /// Display name of the document's default paragraph style.
    pub fn default_name(&self) -> &str {
        self.default.as_deref().unwrap_or(FALLBACK_STYLE)
    }

    /// Resolve a paragraph's style id to its display name.
    ///
    /// Paragraphs without a style, or with an id that names no paragraph
    /// style (undefined, or a character/table style), get the default.
    pub fn resolve(&self, id: Option<&str>) -> String {
        id.and_then(|id| self.names.get(id))
            .map_or_else(|| self.default_name().to_owned(), Clone::clone)
    }
}

impl PendingStyle {
    /// Start collecting a `<w:style>` element if it is a paragraph style.
    fn from_elem(elem: &BytesStart<'_>) -> Option<Self> {
        if attr_value(elem, b"type").as_deref() != Some("paragraph") {
            return None;
        }
        let id = attr_value(elem, b"styleId")?;
        let default = matches!(attr_value(elem, b"default").as_deref(), Some("1" | "true" | "on"));
        Some(Self {
            id,
            name: None,
            default,
        })
    }

    fn visit(&mut self, elem: &BytesStart<'_>) {
        if elem.local_name().as_ref() == b"name" {
            self.name = attr_value(elem, b"val");
        }
    }
}

/// Word stores a few built-in names in lowercase (`heading 1`) while
/// showing them capitalized in its UI.
fn ui_name(name: &str) -> String {
    let builtin = matches!(name, "caption" | "footer" | "header")
        || name
            .strip_prefix("heading ")
            .is_some_and(|level| matches!(level.as_bytes(), [b'1'..=b'9']));

    if !builtin {
        return name.to_owned();
    }

    let mut chars = name.chars();
    chars
        .next()
        .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
        .unwrap_or_default()
}
