//! HTML minification.
//!
//! Enabled through `[build] minify` or `--minify`.

use std::borrow::Cow;

/// Minify html when `enabled`.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify_html(html: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(html);
    }

    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;

    let minified = minify_html::minify(html.as_bytes(), &cfg);
    Cow::Owned(String::from_utf8_lossy(&minified).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = "<!DOCTYPE html>\n<html>\n<head>\n    <title>Test</title>\n</head>\n<body>\n    <!-- note -->\n    <p>Hello   World</p>\n</body>\n</html>";

    #[test]
    fn test_minify_disabled_borrows() {
        let result = minify_html(HTML, false);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, HTML);
    }

    #[test]
    fn test_minify_enabled_shrinks() {
        let result = minify_html(HTML, true);
        assert!(matches!(result, Cow::Owned(_)));
        assert!(result.len() < HTML.len());
        assert!(result.contains("Hello"));
        assert!(result.contains("</p>"));
        assert!(!result.contains("note"));
    }
}
