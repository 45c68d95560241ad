//! Pocketcart application orchestration layer.
//!
//! This crate wires the domain cart to persistence: [`CartStore`] holds the
//! in-memory list, publishes snapshots to subscribers, and hands changed
//! state to a write-behind persistence worker.

pub mod builder;
pub mod store;
pub mod usecases;

mod persist;

#[cfg(test)]
pub(crate) mod testkit;

pub use builder::{AppBuilder, AppContext};
pub use store::CartStore;
