//! Infrastructure adapters for Pocketcart.
//!
//! File-backed key-value storage, the cart repository on top of it, and
//! config file loading. Everything here implements a `cart-core` port.

pub mod cart;
pub mod config;
pub mod kv;

pub use cart::KvCartRepository;
pub use config::FileConfigLoader;
pub use kv::FileKeyValueStore;
