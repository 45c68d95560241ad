//! Persisted cart payload
//!
//! The stored value is a bare JSON array of flat records, one per line item:
//! `[{"id", "title", "image_url", "price", "quantity"}, ...]`.

use serde::{Deserialize, Serialize};

use cart_core::cart::{Product, ProductId};

/// Wire form of a cart line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_str().to_string(),
            title: product.title.clone(),
            image_url: product.image_url.clone(),
            price: product.price,
            quantity: product.quantity,
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: ProductId::new(record.id),
            title: record.title,
            image_url: record.image_url,
            price: record.price,
            quantity: record.quantity,
        }
    }
}
