//! `[build]` section configuration.
//!
//! Contains output paths, escaping, minification and index card settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in docpost.toml - conversion output configuration.
///
/// # Example
/// ```toml
/// [build]
/// posts = "blog/posts"         # Directory receiving generated posts
/// index = "blog/index.html"    # Index page that gets a card per post
/// minify = false
/// escape = true
///
/// [build.card]
/// marker = '<div class="blog-posts">'
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Directory that receives `<slug>.html` post files.
    #[serde(default = "defaults::build::posts")]
    #[educe(Default = defaults::build::posts())]
    pub posts: PathBuf,

    /// Blog index page updated with a card for every new post.
    #[serde(default = "defaults::build::index")]
    #[educe(Default = defaults::build::index())]
    pub index: PathBuf,

    /// Minify the generated post.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// HTML-escape title, category, date and paragraph text.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub escape: bool,

    /// strftime pattern used when no date is given on the command line.
    #[serde(default = "defaults::build::date_format")]
    #[educe(Default = defaults::build::date_format())]
    pub date_format: String,

    /// Index card insertion settings.
    #[serde(default)]
    pub card: CardConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.card]` section - where and how the index card is inserted.
///
/// The card lands right after the first `closing_tag` that follows `marker`.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CardConfig {
    /// Substring locating the post list in the index page.
    #[serde(default = "defaults::build::card::marker")]
    #[educe(Default = defaults::build::card::marker())]
    pub marker: String,

    /// Closing tag after the marker that the card follows.
    #[serde(default = "defaults::build::card::closing_tag")]
    #[educe(Default = defaults::build::card::closing_tag())]
    pub closing_tag: String,

    /// Thumbnail image source, relative to the index page.
    #[serde(default = "defaults::build::card::thumbnail")]
    #[educe(Default = defaults::build::card::thumbnail())]
    pub thumbnail: String,
}
