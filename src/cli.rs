//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap.

use clap::{Parser, error::ErrorKind};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Example:
  docpost my_post.docx 'My Blog Post' 'Self-Care' 'May 1, 2024'";

/// Convert a .docx document into a blog post and add it to the blog index
#[derive(Parser, Debug, Clone)]
#[command(name = "docpost", version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Path of the .docx document to convert
    pub document: PathBuf,

    /// Post title (also used to derive the output file name)
    pub title: String,

    /// Post category
    pub category: String,

    /// Publication date shown on the post (default: today)
    pub date: Option<String>,

    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: docpost.toml)
    #[arg(short = 'C', long, default_value = "docpost.toml")]
    pub config: PathBuf,

    /// Posts directory path (relative to project root)
    #[arg(short, long)]
    pub posts: Option<PathBuf>,

    /// Blog index file path (relative to project root)
    #[arg(short, long)]
    pub index: Option<PathBuf>,

    /// Only write the post, leave the blog index untouched
    #[arg(long)]
    pub no_index: bool,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Escape title, category, date and paragraph text before inserting them into html
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub escape: Option<bool>,
}

impl Cli {
    /// Parse arguments, exiting with status 1 on usage errors.
    ///
    /// `--help` and `--version` keep clap's status 0.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => {
                    err.print().ok();
                    std::process::exit(1);
                }
            },
        }
    }
}
