//! `.docx` document reader.
//!
//! Reads the body paragraphs of a WordprocessingML package in document
//! order, each with its resolved style name and plain text.
//!
//! # Text extraction
//!
//! | Element                      | Text  |
//! |------------------------------|-------|
//! | `w:t`                        | as-is |
//! | `w:tab`, `w:ptab`            | `\t`  |
//! | `w:br`, `w:cr`               | `\n`  |
//! | `w:br w:type="page/column"`  | none  |
//! | `w:noBreakHyphen`            | `-`   |
//!
//! Only runs that are direct children of the paragraph (or of a
//! `w:hyperlink` inside it) contribute text. Tables, text boxes and
//! deleted text are skipped.

mod error;
mod styles;

pub use error::DocxError;
pub use styles::StyleMap;

use crate::utils::xml::{attr_value, create_xml_reader};
use quick_xml::{
    escape::resolve_predefined_entity,
    events::{BytesStart, Event},
};
use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};
use zip::{ZipArchive, result::ZipError};

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";

/// Upper bound on the buffer reserved up front for a package part.
const MAX_PREALLOC: usize = 1 << 20;

/// A styled paragraph of the input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Style display name, e.g. `Heading 1` or `List Bullet`.
    pub style: String,
    /// Raw text content (not trimmed).
    pub text: String,
}

impl Paragraph {
    pub fn new(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            text: text.into(),
        }
    }
}

/// Ordered body paragraphs of a `.docx` file.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Open and parse a `.docx` file.
    pub fn open(path: &Path) -> Result<Self, DocxError> {
        let file = File::open(path).map_err(|err| DocxError::Io(path.to_path_buf(), err))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a `.docx` package from any seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self, DocxError> {
        let mut archive = ZipArchive::new(reader)?;

        let document = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or(DocxError::MissingPart(DOCUMENT_PART))?;
        let styles = match read_part(&mut archive, STYLES_PART)? {
            Some(xml) => StyleMap::parse(&xml)?,
            None => StyleMap::default(),
        };

        Self::from_xml(&document, &styles)
    }

    /// Parse the body of a `word/document.xml` part.
    pub fn from_xml(xml: &[u8], styles: &StyleMap) -> Result<Self, DocxError> {
        let mut reader = create_xml_reader(xml);
        let mut body = BodyReader::new(styles);

        loop {
            match reader
                .read_event()
                .map_err(|err| DocxError::Xml(DOCUMENT_PART, err))?
            {
                Event::Start(e) => body.open(&e, false),
                Event::Empty(e) => body.open(&e, true),
                Event::End(_) => body.close(),
                Event::Text(t) => body.text(&String::from_utf8_lossy(&t)),
                Event::GeneralRef(r) => {
                    let resolved = match r.resolve_char_ref() {
                        Ok(Some(ch)) => Some(ch.to_string()),
                        _ => resolve_predefined_entity(&String::from_utf8_lossy(&r))
                            .map(str::to_owned),
                    };
                    if let Some(text) = resolved {
                        body.text(&text);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self {
            paragraphs: body.paragraphs,
        })
    }
}

/// Read a package part, `None` when the archive has no such entry.
fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &'static str,
) -> Result<Option<Vec<u8>>, DocxError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    // declared sizes come from the archive header and may be bogus
    let capacity = usize::try_from(entry.size()).map_or(MAX_PREALLOC, |size| size.min(MAX_PREALLOC));
    let mut buf = Vec::with_capacity(capacity);
    entry
        .read_to_end(&mut buf)
        .map_err(|err| DocxError::Read(name, err))?;
    Ok(Some(buf))
}

// ============================================================================
// Body Walker
// ============================================================================

/// Paragraph currently being collected.
struct OpenParagraph {
    /// Index of the `p` element in the element path.
    depth: usize,
    style_id: Option<String>,
    text: String,
}

/// Streaming state over `word/document.xml` events.
struct BodyReader<'a> {
    styles: &'a StyleMap,
    /// Local names of the currently open elements.
    path: Vec<Vec<u8>>,
    current: Option<OpenParagraph>,
    paragraphs: Vec<Paragraph>,
}

impl<'a> BodyReader<'a> {
    fn new(styles: &'a StyleMap) -> Self {
        Self {
            styles,
            path: Vec::new(),
            current: None,
            paragraphs: Vec::new(),
        }
    }

    fn open(&mut self, elem: &BytesStart<'_>, empty: bool) {
        let name = elem.local_name().as_ref().to_vec();

        if self.current.is_none() && name == b"p" && path_is(&self.path, &[b"document", b"body"]) {
            self.current = Some(OpenParagraph {
                depth: self.path.len(),
                style_id: None,
                text: String::new(),
            });
        } else if let Some(paragraph) = self.current.as_mut() {
            let rel = &self.path[paragraph.depth + 1..];
            match name.as_slice() {
                b"pStyle" if path_is(rel, &[b"pPr"]) => {
                    paragraph.style_id = attr_value(elem, b"val");
                }
                b"tab" | b"ptab" if is_run_child(rel) => paragraph.text.push('\t'),
                b"br" | b"cr" if is_run_child(rel) => {
                    let kind = attr_value(elem, b"type");
                    if !matches!(kind.as_deref(), Some("page" | "column")) {
                        paragraph.text.push('\n');
                    }
                }
                b"noBreakHyphen" if is_run_child(rel) => paragraph.text.push('-'),
                _ => {}
            }
        }

        self.path.push(name);
        if empty {
            self.close();
        }
    }

    fn close(&mut self) {
        self.path.pop();
        if self
            .current
            .as_ref()
            .is_some_and(|paragraph| paragraph.depth == self.path.len())
        {
            self.finish();
        }
    }

    fn text(&mut self, text: &str) {
        let Some(paragraph) = self.current.as_mut() else {
            return;
        };
        let Some((last, parents)) = self.path.split_last() else {
            return;
        };
        let in_run = parents
            .get(paragraph.depth + 1..)
            .is_some_and(is_run_child);
        if last.as_slice() == b"t" && in_run {
            paragraph.text.push_str(text);
        }
    }

    fn finish(&mut self) {
        if let Some(paragraph) = self.current.take() {
            let style = self.styles.resolve(paragraph.style_id.as_deref());
            self.paragraphs.push(Paragraph::new(style, paragraph.text));
        }
    }
}

/// Compare an element path against expected local names.
fn path_is(path: &[Vec<u8>], expected: &[&[u8]]) -> bool {
    path.len() == expected.len()
        && path
            .iter()
            .zip(expected)
            .all(|(name, expected)| name.as_slice() == *expected)
}

/// Whether `rel` (path below the paragraph) ends in a text-bearing run.
fn is_run_child(rel: &[Vec<u8>]) -> bool {
    path_is(rel, &[b"r"]) || path_is(rel, &[b"hyperlink", b"r"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::{ZipWriter, write::SimpleFileOptions};

    const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    fn document_xml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}"><w:body>{body}<w:sectPr/></w:body></w:document>"#
        )
    }

    fn parse_body(body: &str) -> Vec<Paragraph> {
        Document::from_xml(document_xml(body).as_bytes(), &StyleMap::default())
            .unwrap()
            .paragraphs
    }

    fn build_docx(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let opt = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        for (name, content) in parts {
            zip.start_file(*name, opt).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_plain_paragraphs() {
        let paragraphs = parse_body(
            r#"<w:p><w:r><w:t>Hello</w:t></w:r></w:p>
               <w:p><w:r><w:t xml:space="preserve">two </w:t></w:r><w:r><w:t>runs</w:t></w:r></w:p>"#,
        );
        assert_eq!(
            paragraphs,
            vec![Paragraph::new("Normal", "Hello"), Paragraph::new("Normal", "two runs")]
        );
    }

    #[test]
    fn test_style_id_without_styles_part() {
        let paragraphs = parse_body(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Title</w:t></w:r></w:p>"#,
        );
        assert_eq!(paragraphs, vec![Paragraph::new("Normal", "Title")]);
    }

    #[test]
    fn test_empty_paragraph() {
        let paragraphs = parse_body(r#"<w:p/><w:p><w:pPr><w:pStyle w:val="Quote"/></w:pPr></w:p>"#);
        assert_eq!(
            paragraphs,
            vec![Paragraph::new("Normal", ""), Paragraph::new("Normal", "")]
        );
    }

    #[test]
    fn test_tabs_breaks_and_hyphens() {
        let paragraphs = parse_body(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr>
               <w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t>
               <w:br w:type="page"/><w:t>d</w:t><w:noBreakHyphen/><w:t>e</w:t></w:r></w:p>"#,
        );
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text, "a\tb\ncd-e");
    }

    #[test]
    fn test_entities_and_char_refs() {
        let paragraphs = parse_body(r#"<w:p><w:r><w:t>Q&amp;A &#8212; &lt;ok&gt;</w:t></w:r></w:p>"#);
        assert_eq!(paragraphs[0].text, "Q&A \u{2014} <ok>");
    }

    #[test]
    fn test_hyperlink_text_included() {
        let paragraphs = parse_body(
            r#"<w:p><w:r><w:t xml:space="preserve">see </w:t></w:r>
               <w:hyperlink r:id="rId5" xmlns:r="r"><w:r><w:t>the site</w:t></w:r></w:hyperlink></w:p>"#,
        );
        assert_eq!(paragraphs[0].text, "see the site");
    }

    #[test]
    fn test_tables_and_deleted_text_skipped() {
        let paragraphs = parse_body(
            r#"<w:p><w:r><w:t>before</w:t></w:r></w:p>
               <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
               <w:p><w:del><w:r><w:delText>gone</w:delText></w:r></w:del><w:r><w:t>after</w:t></w:r></w:p>"#,
        );
        assert_eq!(
            paragraphs,
            vec![Paragraph::new("Normal", "before"), Paragraph::new("Normal", "after")]
        );
    }

    #[test]
    fn test_text_box_content_skipped() {
        let paragraphs = parse_body(
            r#"<w:p><w:r><w:t>outer</w:t><w:drawing><w:txbxContent>
               <w:p><w:r><w:t>inner</w:t></w:r></w:p></w:txbxContent></w:drawing></w:r></w:p>"#,
        );
        assert_eq!(paragraphs, vec![Paragraph::new("Normal", "outer")]);
    }

    #[test]
    fn test_from_reader_with_styles() {
        let styles = format!(
            r#"<w:styles xmlns:w="{W_NS}">
                 <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
                 <w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/></w:style>
                 <w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/></w:style>
               </w:styles>"#
        );
        let document = document_xml(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Intro</w:t></w:r></w:p>
               <w:p><w:pPr><w:pStyle w:val="ListBullet"/></w:pPr><w:r><w:t>one</w:t></w:r></w:p>
               <w:p><w:r><w:t>body</w:t></w:r></w:p>"#,
        );
        let bytes = build_docx(&[
            ("[Content_Types].xml", "<Types/>"),
            ("word/document.xml", &document),
            ("word/styles.xml", &styles),
        ]);

        let doc = Document::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(
            doc.paragraphs,
            vec![
                Paragraph::new("Heading 2", "Intro"),
                Paragraph::new("List Bullet", "one"),
                Paragraph::new("Normal", "body"),
            ]
        );
    }

    #[test]
    fn test_from_reader_undefined_style_id_gets_default() {
        let styles = format!(
            r#"<w:styles xmlns:w="{W_NS}">
                 <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
                 <w:style w:type="character" w:styleId="Strong"><w:name w:val="Strong"/></w:style>
               </w:styles>"#
        );
        let document = document_xml(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading3"/></w:pPr><w:r><w:t>x</w:t></w:r></w:p>
               <w:p><w:pPr><w:pStyle w:val="Strong"/></w:pPr><w:r><w:t>y</w:t></w:r></w:p>"#,
        );
        let bytes = build_docx(&[("word/document.xml", &document), ("word/styles.xml", &styles)]);

        let doc = Document::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(
            doc.paragraphs,
            vec![Paragraph::new("Normal", "x"), Paragraph::new("Normal", "y")]
        );
    }

    #[test]
    fn test_large_part_read_fully() {
        let text = "a".repeat(MAX_PREALLOC * 2);
        let document = document_xml(&format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>"));
        let bytes = build_docx(&[("word/document.xml", &document)]);

        let doc = Document::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.paragraphs[0].text.len(), MAX_PREALLOC * 2);
    }

    #[test]
    fn test_missing_document_part() {
        let bytes = build_docx(&[("word/styles.xml", "<w:styles/>")]);
        let err = Document::from_reader(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, DocxError::MissingPart("word/document.xml")));
    }

    #[test]
    fn test_not_a_zip() {
        let err = Document::from_reader(Cursor::new(b"plain text".to_vec())).unwrap_err();
        assert!(matches!(err, DocxError::Archive(_)));
    }

    #[test]
    fn test_open_missing_file() {
        let err = Document::open(Path::new("/definitely/not/here.docx")).unwrap_err();
        assert!(matches!(err, DocxError::Io(..)));
    }

    #[test]
    fn test_open_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.docx");
        let document = document_xml(r#"<w:p><w:r><w:t>from disk</w:t></w:r></w:p>"#);
        std::fs::write(&path, build_docx(&[("word/document.xml", &document)])).unwrap();

        let doc = Document::open(&path).unwrap();
        assert_eq!(doc.paragraphs, vec![Paragraph::new("Normal", "from disk")]);
    }
}
