use anyhow::Result;
use async_trait::async_trait;

/// Local key-value persistence, string keys to string values.
///
/// Mirrors the storage surface a mobile runtime offers: `get` yields the
/// stored value or `None`, `set` replaces it, `remove` deletes the entry.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
