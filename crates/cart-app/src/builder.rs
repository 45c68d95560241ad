//! Application assembly
//!
//! The cart store is constructed once at startup and handed to whichever
//! part of the application needs it through [`AppContext`]; there is no
//! ambient global. A context that was never wired fails fast with
//! [`WiringError`].

use std::sync::Arc;

use cart_core::config::CartConfig;
use cart_core::ports::{CartRepositoryPort, WiringError};

use crate::store::CartStore;

/// Builder for assembling the application runtime.
pub struct AppBuilder {
    repository: Option<Arc<dyn CartRepositoryPort>>,
    config: CartConfig,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            config: CartConfig::default(),
        }
    }

    pub fn with_repository(mut self, repository: Arc<dyn CartRepositoryPort>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_config(mut self, config: CartConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the wired context. The repository is required.
    pub fn build(self) -> anyhow::Result<AppContext> {
        let repository = self
            .repository
            .ok_or_else(|| anyhow::anyhow!("CartRepositoryPort is required"))?;

        let store = CartStore::new(repository, &self.config);

        Ok(AppContext { cart: Some(store) })
    }
}

/// Handle through which the rest of the application reaches the cart.
///
/// Cheap to clone and pass around. The default value is an unwired context:
/// every cart access on it fails with [`WiringError`].
#[derive(Clone, Default, Debug)]
pub struct AppContext {
    cart: Option<Arc<CartStore>>,
}

impl AppContext {
    /// The cart store, or [`WiringError`] if this context was never built
    /// through [`AppBuilder`].
    pub fn cart(&self) -> Result<Arc<CartStore>, WiringError> {
        self.cart.clone().ok_or(WiringError)
    }
}
