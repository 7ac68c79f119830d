//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn site_name() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn email() -> String {
        "user@noreply.docpost".into()
    }

    pub fn language() -> String {
        "en".into()
    }

    pub fn description() -> String {
        "Professional insights and guidance for mental health and personal growth.".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn posts() -> PathBuf {
        "blog/posts".into()
    }

    pub fn index() -> PathBuf {
        "blog/index.html".into()
    }

    pub fn date_format() -> String {
        "%B %d, %Y".into()
    }

    pub mod card {
        pub fn marker() -> String {
            r#"<div class="blog-posts">"#.into()
        }

        pub fn closing_tag() -> String {
            "</div>".into()
        }

        pub fn thumbnail() -> String {
            "../images/blog-placeholder.jpg".into()
        }
    }
}
