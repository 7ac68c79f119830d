//! Site configuration management for `docpost.toml`.
//!
//! The config file is optional; every field has a default matching the
//! usual `blog/` layout.
//!
//! # Sections
//!
//! | Section        | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `[base]`       | Site identity (name, contact, copyright)       |
//! | `[build]`      | Output paths, escaping, minification, date     |
//! | `[build.card]` | Index card marker and thumbnail                |
//!
//! # Example
//!
//! ```toml
//! [base]
//! site_name = "My Practice"
//! email = "hello@example.com"
//!
//! [build]
//! posts = "blog/posts"
//! index = "blog/index.html"
//!
//! [build.card]
//! marker = '<div class="blog-posts">'
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;

use crate::{cli::Cli, utils::date};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing docpost.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity
    #[serde(default)]
    pub base: BaseConfig,

    /// Output settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let config =
            Self::from_str(&content).map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        self.update_path_with_root(cli, &root);

        Self::update_option(&mut self.build.minify, cli.minify.as_ref());
        Self::update_option(&mut self.build.escape, cli.escape.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, cli: &Cli, root: &Path) {
        Self::update_option(&mut self.build.posts, cli.posts.as_ref());
        Self::update_option(&mut self.build.index, cli.index.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.posts = Self::normalize_path(&root.join(&self.build.posts));
        self.build.index = Self::normalize_path(&root.join(&self.build.index));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before converting
    pub fn validate(&self) -> Result<()> {
        if self.build.card.marker.is_empty() {
            bail!(ConfigError::Validation("[build.card.marker] must not be empty".into()));
        }

        if self.build.card.closing_tag.is_empty() {
            bail!(ConfigError::Validation(
                "[build.card.closing_tag] must not be empty".into()
            ));
        }

        if self.build.posts.is_file() {
            bail!(ConfigError::Validation("[build.posts] is not a directory".into()));
        }

        if !date::is_date_format(&self.build.date_format) {
            bail!(ConfigError::Validation(format!(
                "[build.date_format] `{}` is not a valid date pattern",
                self.build.date_format
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
