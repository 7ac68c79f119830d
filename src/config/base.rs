//! `[base]` section configuration.
//!
//! Contains the site identity rendered into every post page.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in docpost.toml - site metadata used by the page template.
///
/// # Example
/// ```toml
/// [base]
/// site_name = "Megan Shih, LCSW"
/// email = "megan@example.com"
/// phone = "(415) 555-0100"
/// copyright = "2024 Megan Shih, LCSW"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site name shown in the navigation bar and the page title.
    #[serde(default = "defaults::base::site_name")]
    #[educe(Default = defaults::base::site_name())]
    pub site_name: String,

    /// Contact email shown in the footer.
    #[serde(default = "defaults::base::email")]
    #[educe(Default = defaults::base::email())]
    pub email: String,

    /// Contact phone shown in the footer. Omitted when empty.
    #[serde(default)]
    pub phone: String,

    /// Copyright notice for the footer. Defaults to the site name.
    #[serde(default)]
    pub copyright: String,

    /// BCP 47 language code for the `<html lang>` attribute.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Sentence appended to every post's meta description.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,
}

impl BaseConfig {
    /// Copyright line, falling back to the site name.
    pub fn copyright(&self) -> &str {
        if self.copyright.is_empty() {
            &self.site_name
        } else {
            &self.copyright
        }
    }
}
