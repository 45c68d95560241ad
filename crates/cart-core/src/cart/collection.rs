use super::{Product, ProductId};

/// The ordered, id-unique collection of products held by the store.
///
/// Insertion order carries no meaning but is preserved so consumers render a
/// stable list. All three mutation operations are total: there is no error
/// path, and an unknown id is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from a persisted snapshot.
    ///
    /// Storage is trusted, but the invariants still hold after hydration:
    /// zero-quantity entries are dropped and a duplicated id keeps its first
    /// occurrence.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut cart = Self::new();
        for product in products {
            if product.quantity == 0 || cart.position(&product.id).is_some() {
                continue;
            }
            cart.products.push(product);
        }
        cart
    }

    /// Add a product to the cart.
    ///
    /// A new id is appended with quantity 1 regardless of the quantity the
    /// descriptor carries; an id already present has its quantity raised by
    /// one. Never removes and never decreases.
    pub fn add(&mut self, descriptor: Product) {
        match self.position(&descriptor.id) {
            Some(index) => {
                self.products[index].quantity = self.products[index].quantity.saturating_add(1);
            }
            None => {
                self.products.push(Product {
                    quantity: 1,
                    ..descriptor
                });
            }
        }
    }

    /// Raise the quantity of the item with the given id by one.
    ///
    /// Returns whether the list changed; an unknown id changes nothing.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.products[index].quantity = self.products[index].quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Lower the quantity of the item with the given id by one, removing the
    /// entry entirely when its quantity is already 1.
    ///
    /// Returns whether the list changed; an unknown id changes nothing.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        match self.position(id) {
            Some(index) => {
                if self.products[index].quantity <= 1 {
                    self.products.remove(index);
                } else {
                    self.products[index].quantity -= 1;
                }
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.position(id).map(|index| &self.products[index])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn snapshot(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of quantities across all line items.
    pub fn total_items(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity)).sum()
    }

    // The only found/not-found sentinel in the cart. Index 0 is a valid
    // position; absent must stay `None`, never a falsy index.
    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| &p.id == id)
    }
}
