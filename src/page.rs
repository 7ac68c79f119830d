//! Blog post page assembly.
//!
//! Wraps the converted body in the site's navigation and footer template
//! and writes it to `<posts>/<slug>.html`.

use crate::{config::SiteConfig, log, utils::xml::escape_html};
use anyhow::{Context, Result, bail};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

/// Title, category and date of a post, as shown on the page and index card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub title: String,
    pub category: String,
    pub date: String,
}

/// Meta fields ready for interpolation into html.
pub struct MetaHtml<'a> {
    pub title: Cow<'a, str>,
    pub category: Cow<'a, str>,
    pub date: Cow<'a, str>,
}

impl PostMeta {
    /// Fields escaped with [`escape_html`] when `escape` is set.
    pub fn html(&self, escape: bool) -> MetaHtml<'_> {
        MetaHtml {
            title: escape_html(&self.title, escape),
            category: escape_html(&self.category, escape),
            date: escape_html(&self.date, escape),
        }
    }
}

/// Render the complete post page around an already converted body.
pub fn render_post(meta: &PostMeta, body: &str, config: &SiteConfig) -> String {
    let base = &config.base;
    let escape = config.build.escape;
    let MetaHtml {
        title,
        category,
        date,
    } = meta.html(escape);
    let site = escape_html(&base.site_name, escape);
    let lang = escape_html(&base.language, escape);
    let description = escape_html(&base.description, escape);
    let copyright = escape_html(base.copyright(), escape);

    let mut contact = format!(
        "                <p>Email: {}</p>\n",
        escape_html(&base.email, escape)
    );
    if !base.phone.is_empty() {
        contact.push_str(&format!(
            "                <p>Phone: {}</p>\n",
            escape_html(&base.phone, escape)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {site}</title>
    <meta name="description" content="Read about {title} on the {site} blog. {description}">
    <link rel="stylesheet" href="../styles.css">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css">
    <link href="https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;700&family=Source+Sans+Pro:wght@400;600&display=swap" rel="stylesheet">
</head>
<body>
    <nav class="navbar">
        <div class="nav-content">
            <a href="../index.html" class="nav-logo">{site}</a>
            <div class="nav-links">
                <a href="../index.html">Home</a>
                <a href="../index.html#about">About</a>
                <a href="../index.html#services">Services</a>
                <a href="../policies.html">Policies</a>
                <a href="../contact.html">Contact</a>
                <a href="../blog/index.html" class="active">Blog</a>
            </div>
        </div>
    </nav>

    <article class="blog-post" style="margin-top: 100px;">
        <header class="blog-post-header">
            <h1>{title}</h1>
            <div class="blog-post-meta">
                <span class="blog-post-date">{date}</span>
                <span class="blog-post-category">{category}</span>
            </div>
        </header>

        <div class="blog-post-content">
{body}        </div>
    </article>

    <div class="cta-section">
        <h2>Ready to Start Your Journey?</h2>
        <p>Schedule a consultation to begin your path to healing and growth.</p>
        <a href="../contact.html" class="cta-button">Schedule Consultation</a>
    </div>

    <footer>
        <div class="footer-content">
            <div class="footer-section">
                <h3>Contact</h3>
{contact}            </div>
            <div class="footer-section">
                <h3>Services</h3>
                <ul>
                    <li><a href="../index.html#services">Individual Therapy</a></li>
                    <li><a href="../index.html#services">Couples Therapy</a></li>
                    <li><a href="../index.html#services">Group Therapy</a></li>
                </ul>
            </div>
        </div>
        <div class="footer-bottom">
            <p>&copy; {copyright}. All rights reserved.</p>
        </div>
    </footer>
</body>
</html>"#
    )
}

/// Write a rendered post to `<posts_dir>/<slug>.html`, creating the directory.
///
/// Returns the path of the written file.
pub fn write_post(posts_dir: &Path, slug: &str, html: &str) -> Result<PathBuf> {
    if slug.is_empty() {
        bail!("title does not contain any character usable in a file name");
    }

    fs::create_dir_all(posts_dir)
        .with_context(|| format!("Failed to create {}", posts_dir.display()))?;

    let path = posts_dir.join(format!("{slug}.html"));
    if path.exists() {
        log!("post"; "overwriting {}", path.display());
    }
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> PostMeta {
        PostMeta {
            title: "Finding Calm".into(),
            category: "Self-Care".into(),
            date: "May 1, 2024".into(),
        }
    }

    #[test]
    fn test_render_post_substitutes_meta() {
        let html = render_post(&meta(), "<p>Body</p>\n", &SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<title>Finding Calm - &lt;YOUR_NAME&gt;</title>"));
        assert!(html.contains("<h1>Finding Calm</h1>"));
        assert!(html.contains(r#"<span class="blog-post-date">May 1, 2024</span>"#));
        assert!(html.contains(r#"<span class="blog-post-category">Self-Care</span>"#));
        assert!(html.contains("Read about Finding Calm on the"));
    }

    #[test]
    fn test_render_post_embeds_body() {
        let html = render_post(&meta(), "<h1>Hello</h1>\n<p>World</p>\n", &SiteConfig::default());
        assert!(html.contains(
            "<div class=\"blog-post-content\">\n<h1>Hello</h1>\n<p>World</p>\n        </div>"
        ));
    }

    #[test]
    fn test_render_post_escapes_meta() {
        let mut meta = meta();
        meta.title = "<script>alert(1)</script>".into();
        let html = render_post(&meta, "", &SiteConfig::default());

        assert!(!html.contains("<script>"));
        assert!(html.contains("<h1>&lt;script&gt;alert(1)&lt;/script&gt;</h1>"));
    }

    #[test]
    fn test_render_post_unescaped_when_disabled() {
        let mut config = SiteConfig::default();
        config.build.escape = false;
        let mut meta = meta();
        meta.category = "Tips & Tricks".into();

        let html = render_post(&meta, "", &config);
        assert!(html.contains(r#"<span class="blog-post-category">Tips & Tricks</span>"#));
    }

    #[test]
    fn test_render_post_site_identity() {
        let mut config = SiteConfig::default();
        config.base.site_name = "Calm Practice".into();
        config.base.email = "hello@calm.test".into();
        config.base.phone = "(415) 555-0100".into();
        config.base.language = "en-US".into();

        let html = render_post(&meta(), "", &config);
        assert!(html.contains(r#"<html lang="en-US">"#));
        assert!(html.contains(r#"class="nav-logo">Calm Practice</a>"#));
        assert!(html.contains("<p>Email: hello@calm.test</p>"));
        assert!(html.contains("<p>Phone: (415) 555-0100</p>"));
        assert!(html.contains("<p>&copy; Calm Practice. All rights reserved.</p>"));
    }

    #[test]
    fn test_render_post_without_phone() {
        let html = render_post(&meta(), "", &SiteConfig::default());
        assert!(!html.contains("Phone:"));
    }

    #[test]
    fn test_meta_html() {
        let meta = PostMeta {
            title: "A & B".into(),
            category: "x".into(),
            date: "today".into(),
        };
        assert_eq!(meta.html(true).title, "A &amp; B");
        assert_eq!(meta.html(false).title, "A & B");
        assert_eq!(meta.html(true).date, "today");
    }

    #[test]
    fn test_write_post_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("blog/posts");

        let path = write_post(&posts, "finding-calm", "<html></html>").unwrap();

        assert_eq!(path, posts.join("finding-calm.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_post_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "post", "old").unwrap();
        let path = write_post(dir.path(), "post", "new").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_write_post_empty_slug() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_post(dir.path(), "", "<html></html>").is_err());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
