//! docpost - turn a .docx document into a static blog post.

mod cli;
mod config;
mod convert;
mod docx;
mod index;
mod logger;
mod page;
mod publish;
mod utils;

use anyhow::Result;
use cli::Cli;
use config::SiteConfig;
use publish::{PublishRequest, Published, publish_post};
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse_or_exit()));
    let config = load_config(cli)?;

    let request = PublishRequest::from_config(&config)?;
    let Some(Published { post, index }) = publish_post(&request, &config)? else {
        return Ok(());
    };
    if index.is_none() {
        log!("index"; "skipped, link {} from the index manually", post.display());
    }
    Ok(())
}

/// Load and validate configuration from CLI arguments.
///
/// The config file is optional, defaults apply when it is missing.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
