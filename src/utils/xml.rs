//! XML processing utilities.
//!
//! Provides XML reader creation, attribute lookup and text escaping helpers
//! shared by the document reader and the html writers.

use quick_xml::{Reader, escape::escape, events::BytesStart};
use std::borrow::Cow;

/// Create a configured XML reader from content bytes
#[inline]
pub fn create_xml_reader(content: &[u8]) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);
    reader
}

/// Look up an attribute by local name, ignoring its namespace prefix.
///
/// `<w:pStyle w:val="Heading1"/>` → `attr_value(elem, b"val") == Some("Heading1")`
pub fn attr_value(elem: &BytesStart<'_>, local: &[u8]) -> Option<String> {
    elem.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == local)
        .and_then(|attr| attr.unescape_value().ok().map(Cow::into_owned))
}

/// Escape `& < > ' "` when `enabled`, otherwise pass the text through.
#[inline]
pub fn escape_html(text: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        escape(text)
    } else {
        Cow::Borrowed(text)
    }
}
