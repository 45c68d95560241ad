//! Use case for lowering a line item's quantity

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use cart_core::cart::ProductId;

use crate::store::CartStore;

/// Lowers the quantity of the item with the given id by one; an item at
/// quantity 1 is removed from the cart entirely. An id that is not in the
/// cart is a no-op, not an error.
pub struct DecrementItem {
    store: Arc<CartStore>,
}

impl DecrementItem {
    pub fn new(store: Arc<CartStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: &ProductId) {
        let span = info_span!("usecase.decrement_item.execute");

        async {
            info!(product_id = %id, "decrementing cart item");
            self.store.decrement(id).await;
        }
        .instrument(span)
        .await
    }
}
