//! Shared helpers for unit tests.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use cart_core::cart::Product;
use cart_core::config::CartConfig;
use cart_core::ports::CartRepositoryPort;

use crate::store::CartStore;

/// Repository that never has anything persisted and accepts every write.
pub struct NullRepository;

#[async_trait]
impl CartRepositoryPort for NullRepository {
    async fn load(&self) -> Result<Option<Vec<Product>>> {
        Ok(None)
    }

    async fn save(&self, _products: &[Product]) -> Result<()> {
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }
}

pub fn empty_store() -> Arc<CartStore> {
    CartStore::new(Arc::new(NullRepository), &CartConfig::default())
}

pub fn descriptor(id: &str) -> Product {
    Product::descriptor(id, format!("Product {id}"), format!("https://img.test/{id}.png"), 10.0)
}
