//! Title slugification.
//!
//! Turns a post title into the file stem of its HTML page.

/// Convert a title to a lowercase, hyphenated file stem.
///
/// Keeps ASCII letters, digits and `-`; every run of whitespace becomes a
/// single `-`, everything else is dropped.
///
/// `"My Blog Post!"` → `"my-blog-post"`
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        // removed characters don't end a whitespace run
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
            in_space = false;
        }
    }

    slug
}
