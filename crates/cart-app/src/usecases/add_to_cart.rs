//! Use case for adding a product to the cart

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use cart_core::cart::Product;

use crate::store::CartStore;

/// Use case for adding a product to the cart.
///
/// ## Behavior
/// - A product not yet in the cart is appended with quantity 1
/// - A product already in the cart has its quantity raised by one
/// - The descriptor's own quantity field is ignored
/// - Total operation: it cannot fail and never removes anything
pub struct AddToCart {
    store: Arc<CartStore>,
}

impl AddToCart {
    pub fn new(store: Arc<CartStore>) -> Self {
        Self { store }
    }

    /// Execute the use case.
    pub async fn execute(&self, descriptor: Product) {
        let span = info_span!("usecase.add_to_cart.execute");

        async {
            info!(product_id = %descriptor.id, title = %descriptor.title, "adding product to cart");
            self.store.add_to_cart(descriptor).await;
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
    async fn test_add_appends_then_counts_up() {
        let store = empty_store();
        let usecase = AddToCart::new(store.clone());

        usecase.execute(descriptor("A")).await;
        usecase.execute(descriptor("A")).await;

        let products = store.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 2);
    }
}
