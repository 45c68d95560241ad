//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (the cart store
//! and its use cases) and infrastructure implementations, keeping the domain
//! independent of how the cart is actually persisted.

pub mod cart_repository;
pub mod errors;
pub mod key_value_store;

pub use cart_repository::CartRepositoryPort;
pub use errors::{CartRepositoryError, WiringError};
pub use key_value_store::KeyValueStorePort;
