//! Conversion pipeline.
//!
//! document → body fragments → post page → posts dir → index card

use crate::{
    config::SiteConfig,
    convert::render_body,
    docx::Document,
    index::{IndexUpdate, update_index},
    log,
    page::{PostMeta, render_post, write_post},
    utils::{date, minify::minify_html, slug::slugify},
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Everything one run needs, taken from the CLI and config.
#[derive(Debug, Clone)]
pub struct PublishRequest<'a> {
    pub document: &'a Path,
    pub meta: PostMeta,
    pub update_index: bool,
}

/// Files touched by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub post: PathBuf,
    pub index: Option<IndexUpdate>,
}

impl<'a> PublishRequest<'a> {
    /// Build the request from the parsed command line.
    pub fn from_config(config: &'a SiteConfig) -> Result<Self> {
        let cli = config.cli.context("CLI arguments are not loaded")?;
        let format = &config.build.date_format;
        let date = date::resolve(cli.date.as_deref(), format)
            .with_context(|| format!("Failed to format today's date with `{format}`"))?;

        Ok(Self {
            document: cli.document.as_path(),
            meta: PostMeta {
                title: cli.title.clone(),
                category: cli.category.clone(),
                date,
            },
            update_index: !cli.no_index,
        })
    }
}

/// Convert the document, write the post and add its card to the index.
///
/// A missing document is logged and yields `None` with nothing written.
/// A post that was written stays in place if the index update fails
/// afterwards.
pub fn publish_post(
    request: &PublishRequest<'_>,
    config: &SiteConfig,
) -> Result<Option<Published>> {
    let PublishRequest {
        document,
        meta,
        update_index: with_index,
    } = request;

    if !document.exists() {
        log!("error"; "File {} not found.", document.display());
        return Ok(None);
    }

    let doc = Document::open(document)
        .with_context(|| format!("Failed to read {}", document.display()))?;
    log!("convert"; "{} paragraphs from {}", doc.paragraphs.len(), document.display());

    let body = render_body(&doc.paragraphs, config.build.escape)
        .with_context(|| format!("Failed to convert {}", document.display()))?;
    let html = render_post(meta, &body, config);
    let html = minify_html(&html, config.build.minify);

    let post = write_post(&config.build.posts, &slugify(&meta.title), &html)?;
    log!("post"; "Blog post created successfully at: {}", post.display());

    let index = if *with_index {
        Some(update_index(&config.build.index, &post, meta, config)?)
    } else {
        None
    };

    Ok(Some(Published { post, index }))
}
