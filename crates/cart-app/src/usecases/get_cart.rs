use std::sync::Arc;

use cart_core::cart::Product;

use crate::store::CartStore;

/// Read access to the current cart snapshot.
pub struct GetCart {
    store: Arc<CartStore>,
}

impl GetCart {
    pub fn new(store: Arc<CartStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Vec<Product> {
        self.store.products()
    }
}
