//! File-backed key-value store
//!
//! One file per key under a base directory. Writes go through a temp file
//! and a rename, so a concurrent reader sees either the previous value or
//! the complete new one, never a torn write.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use tokio::fs;

use cart_core::ports::KeyValueStorePort;

pub const DEFAULT_STORE_DIR_NAME: &str = "pocketcart";

pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Store rooted at the platform-local data directory.
    pub fn with_defaults() -> Result<Self> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| anyhow!("no local data directory available on this platform"))?;
        Ok(Self::new(data_dir.join(DEFAULT_STORE_DIR_NAME)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    async fn ensure_base_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .with_context(|| format!("create store dir failed: {}", self.base_dir.display()))?;
        Ok(())
    }

    async fn atomic_write(&self, key: &str, content: &str) -> Result<()> {
        self.ensure_base_dir().await?;

        let target = self.path_for(key);
        let tmp_path = target.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp value failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &target).await.with_context(|| {
            format!(
                "rename temp value to target failed: {} -> {}",
                tmp_path.display(),
                target.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("read value failed: {}", path.display()))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.atomic_write(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("remove value failed: {}", path.display()))
            }
        }
    }
}
