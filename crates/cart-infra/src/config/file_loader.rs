//! Config file loading
//!
//! The config file is optional; a missing file yields the defaults, and any
//! field the file omits keeps its default value.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tracing::debug;

use cart_core::config::CartConfig;

pub const DEFAULT_CONFIG_FILE: &str = "pocketcart.json";

pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        Self {
            path: base_dir.as_ref().join(DEFAULT_CONFIG_FILE),
        }
    }

    pub async fn load(&self) -> Result<CartConfig> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "config file not found, using defaults");
                return Ok(CartConfig::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read config failed: {}", self.path.display()))
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("parse config failed: {}", self.path.display()))
    }
}
