use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use cart_core::cart::Product;
use cart_core::config::CartConfig;
use cart_core::ports::{CartRepositoryError, CartRepositoryPort, KeyValueStorePort};

use super::records::ProductRecord;

/// Cart repository over a key-value store.
///
/// The whole cart lives under a single key as a serialized array; load and
/// save always move the full snapshot.
pub struct KvCartRepository {
    store: Arc<dyn KeyValueStorePort>,
    key: String,
}

impl KvCartRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn from_config(store: Arc<dyn KeyValueStorePort>, config: &CartConfig) -> Self {
        Self::new(store, config.storage_key.clone())
    }
}

#[async_trait]
impl CartRepositoryPort for KvCartRepository {
    async fn load(&self) -> Result<Option<Vec<Product>>> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(e) => return Err(CartRepositoryError::Storage(e.to_string()).into()),
        };

        // An empty value reads as absent, same as a missing key.
        if raw.trim().is_empty() {
            return Ok(None);
        }

        let records: Vec<ProductRecord> = serde_json::from_str(&raw)
            .map_err(|e| CartRepositoryError::Malformed(e.to_string()))?;

        debug!(key = %self.key, items = records.len(), "loaded persisted cart");
        Ok(Some(records.into_iter().map(Product::from).collect()))
    }

    async fn save(&self, products: &[Product]) -> Result<()> {
        let records: Vec<ProductRecord> = products.iter().map(ProductRecord::from).collect();
        let payload = serde_json::to_string(&records).context("serialize cart failed")?;

        self.store
            .set(&self.key, &payload)
            .await
            .map_err(|e| CartRepositoryError::Storage(e.to_string()).into())
    }

    async fn clear(&self) -> Result<()> {
        self.store
            .remove(&self.key)
            .await
            .map_err(|e| CartRepositoryError::Storage(e.to_string()).into())
    }
}
