//! Cart configuration domain model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "products";
pub const DEFAULT_WRITE_RETRIES: u32 = 2;

/// Runtime configuration for the cart store.
///
/// Everything has a usable default; a config file only overrides what it
/// names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    /// Directory holding the key-value store files. `None` means the
    /// platform data directory chosen by the infrastructure layer.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Key the serialized cart is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// How many times a failed cart write is retried before the snapshot is
    /// dropped from the persistence queue.
    #[serde(default = "default_write_retries")]
    pub persist_write_retries: u32,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_write_retries: DEFAULT_WRITE_RETRIES,
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_write_retries() -> u32 {
    DEFAULT_WRITE_RETRIES
}
