//! Document reading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening or parsing a `.docx` package
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("not a valid .docx archive")]
    Archive(#[from] zip::result::ZipError),

    #[error("`{0}` is missing from the document package")]
    MissingPart(&'static str),

    #[error("failed to read `{0}` from the document package")]
    Read(&'static str, #[source] std::io::Error),

    #[error("malformed xml in `{0}`")]
    Xml(&'static str, #[source] quick_xml::Error),
}
