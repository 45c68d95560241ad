//! Use case for raising a line item's quantity

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use cart_core::cart::ProductId;

use crate::store::CartStore;

/// Raises the quantity of the item with the given id by one. An id that is
/// not in the cart is a no-op, not an error.
pub struct IncrementItem {
    store: Arc<CartStore>,
}

impl IncrementItem {
    pub fn new(store: Arc<CartStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: &ProductId) {
        let span = info_span!("usecase.increment_item.execute");

        async {
            info!(product_id = %id, "incrementing cart item");
            self.store.increment(id).await;
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{descriptor, empty_store};

    #[tokio::test]
    async fn test_increment_known_item() {
        let store = empty_store();
        store.add_to_cart(descriptor("A")).await;

        IncrementItem::new(store.clone())
            .execute(&ProductId::from("A"))
            .await;

        assert_eq!(store.products()[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_increment_unknown_item_is_a_noop() {
        let store = empty_store();
        store.add_to_cart(descriptor("A")).await;

        IncrementItem::new(store.clone())
            .execute(&ProductId::from("missing"))
            .await;

        assert_eq!(store.products().len(), 1);
        assert_eq!(store.products()[0].quantity, 1);
    }
}
