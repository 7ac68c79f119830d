//! Configuration error types.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors from loading or checking `docpost.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("`{0}` is not a valid docpost config")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("invalid config value: {0}")]
    Validation(String),
}
