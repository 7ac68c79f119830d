//! Blog index update.
//!
//! Inserts a summary card for a new post into the index page. The edit is
//! textual: the card goes right after the first closing tag that follows
//! the marker, and every other byte of the page is kept.

use crate::{config::SiteConfig, log, page::PostMeta, utils::xml::escape_html};
use anyhow::{Context, Result};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("could not find `{0}` in the index page")]
    MarkerNotFound(String),

    #[error("no `{closing_tag}` after `{marker}` in the index page")]
    ClosingTagNotFound { marker: String, closing_tag: String },
}

/// Outcome of an index update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexUpdate {
    /// Card inserted and file rewritten.
    Inserted,
    /// Insertion point not found, file left untouched.
    Skipped,
}

/// Render the summary card linking to `href`.
pub fn render_card(href: &str, meta: &PostMeta, config: &SiteConfig) -> String {
    let escape = config.build.escape;
    let html = meta.html(escape);
    let (title, category, date) = (&html.title, &html.category, &html.date);
    let teaser = escape_html(&meta.title.to_lowercase(), escape).into_owned();
    let thumbnail = escape_html(&config.build.card.thumbnail, escape);
    let href = escape_html(href, escape);

    format!(
        r#"            <article class="blog-post-card">
                <div class="blog-post-thumbnail">
                    <img src="{thumbnail}" alt="{title}">
                </div>
                <div class="blog-post-content">
                    <h2>{title}</h2>
                    <div class="blog-post-meta">
                        <span class="blog-post-date">{date}</span>
                        <span class="blog-post-category">{category}</span>
                    </div>
                    <p>Read more about {teaser} and discover insights for your personal growth journey.</p>
                    <a href="{href}" class="read-more">Read More</a>
                </div>
            </article>"#
    )
}

/// Insert `"\n" + card` right after the first `closing_tag` following `marker`.
pub fn splice_card(
    content: &str,
    marker: &str,
    closing_tag: &str,
    card: &str,
) -> Result<String, IndexError> {
    let marker_at = content
        .find(marker)
        .ok_or_else(|| IndexError::MarkerNotFound(marker.to_owned()))?;

    let insert_at = content[marker_at..]
        .find(closing_tag)
        .map(|offset| marker_at + offset + closing_tag.len())
        .ok_or_else(|| IndexError::ClosingTagNotFound {
            marker: marker.to_owned(),
            closing_tag: closing_tag.to_owned(),
        })?;

    let mut spliced = String::with_capacity(content.len() + card.len() + 1);
    spliced.push_str(&content[..insert_at]);
    spliced.push('\n');
    spliced.push_str(card);
    spliced.push_str(&content[insert_at..]);
    Ok(spliced)
}

/// Link from the index page to the post, relative to the index directory.
///
/// Falls back to `posts/<file name>` when the post lives outside it.
pub fn post_href(index_path: &Path, post_path: &Path) -> String {
    let index_dir = index_path
        .parent()
        .and_then(|dir| dir.canonicalize().ok())
        .unwrap_or_default();
    let post_path = post_path
        .canonicalize()
        .unwrap_or_else(|_| post_path.to_path_buf());

    match post_path.strip_prefix(&index_dir) {
        Ok(relative) if !index_dir.as_os_str().is_empty() => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        _ => {
            let name = post_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("posts/{name}")
        }
    }
}

/// Add a card for `post_path` to the index page.
///
/// A missing insertion point is logged and leaves the file untouched.
pub fn update_index(
    index_path: &Path,
    post_path: &Path,
    meta: &PostMeta,
    config: &SiteConfig,
) -> Result<IndexUpdate> {
    let content = fs::read_to_string(index_path)
        .with_context(|| format!("Failed to read {}", index_path.display()))?;

    let card = render_card(&post_href(index_path, post_path), meta, config);
    let card_config = &config.build.card;

    match splice_card(&content, &card_config.marker, &card_config.closing_tag, &card) {
        Ok(updated) => {
            fs::write(index_path, updated)
                .with_context(|| format!("Failed to write {}", index_path.display()))?;
            log!("index"; "added `{}` to {}", meta.title, index_path.display());
            Ok(IndexUpdate::Inserted)
        }
        Err(err) => {
            log!("error"; "{err}, {} left unchanged", index_path.display());
            Ok(IndexUpdate::Skipped)
        }
    }
}
