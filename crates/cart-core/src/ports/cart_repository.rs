use anyhow::Result;
use async_trait::async_trait;

use crate::cart::Product;

/// Persistence for the cart.
///
/// The cart is always written as a whole snapshot, last write wins; there is
/// no per-item persistence and no partial update.
#[async_trait]
pub trait CartRepositoryPort: Send + Sync {
    /// Load the persisted cart.
    ///
    /// Returns `None` when nothing has been persisted yet, which is distinct
    /// from an empty cart having been saved.
    async fn load(&self) -> Result<Option<Vec<Product>>>;

    /// Replace the persisted cart with the given snapshot.
    async fn save(&self, products: &[Product]) -> Result<()>;

    /// Remove the persisted cart entirely.
    ///
    /// Not exposed on the use-case surface; exists for tests and for an
    /// explicit wipe of the storage entry.
    async fn clear(&self) -> Result<()>;
}
