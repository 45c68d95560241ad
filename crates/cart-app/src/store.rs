//! The cart store
//!
//! Holds the in-memory cart, serializes mutations, publishes a snapshot to
//! subscribers after every change, and hands the snapshot to the
//! persistence worker. Consumers read snapshots; all changes go through the
//! mutation operations.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, oneshot, watch, Mutex};
use tracing::{info, warn};

use cart_core::cart::{Cart, Product, ProductId};
use cart_core::config::CartConfig;
use cart_core::ports::CartRepositoryPort;

use crate::persist::{PersistCommand, PersistWorker};

pub struct CartStore {
    // Mutations lock the cart; the watch channel carries the published
    // snapshot, so reads never contend with writers.
    cart: Mutex<Cart>,
    snapshot_tx: watch::Sender<Vec<Product>>,
    persist_tx: mpsc::UnboundedSender<PersistCommand>,
    repository: Arc<dyn CartRepositoryPort>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create the store and spawn its persistence worker.
    ///
    /// Must be called from within a tokio runtime. The store starts empty;
    /// call [`hydrate`](Self::hydrate) to load the persisted cart.
    pub fn new(repository: Arc<dyn CartRepositoryPort>, config: &CartConfig) -> Arc<Self> {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        let (persist_tx, persist_rx) = mpsc::unbounded_channel();

        let worker = PersistWorker::new(repository.clone(), config.persist_write_retries);
        tokio::spawn(worker.run(persist_rx));

        Arc::new(Self {
            cart: Mutex::new(Cart::new()),
            snapshot_tx,
            persist_tx,
            repository,
        })
    }

    /// Load the persisted cart into memory.
    ///
    /// Intended to run once at startup. Nothing persisted leaves the cart
    /// empty. A storage failure also leaves the cart empty and usable; the
    /// error is logged and returned rather than swallowed. Consumers may
    /// observe the empty cart before hydration completes.
    pub async fn hydrate(&self) -> Result<()> {
        let loaded = match self.repository.load().await {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(error = %e, "cart hydration failed, starting empty");
                return Err(e).context("hydrate cart failed");
            }
        };

        let Some(products) = loaded else {
            return Ok(());
        };

        let mut cart = self.cart.lock().await;
        *cart = Cart::from_products(products);
        info!(items = cart.len(), "cart hydrated from storage");
        self.publish(&cart);
        Ok(())
    }

    /// Add a product to the cart.
    ///
    /// A new id is appended with quantity 1; a known id has its quantity
    /// raised by one. Always succeeds.
    pub async fn add_to_cart(&self, descriptor: Product) {
        let mut cart = self.cart.lock().await;
        cart.add(descriptor);
        self.publish(&cart);
    }

    /// Raise the quantity of the given item by one. Unknown ids are a no-op
    /// and publish nothing.
    pub async fn increment(&self, id: &ProductId) {
        let mut cart = self.cart.lock().await;
        if cart.increment(id) {
            self.publish(&cart);
        }
    }

    /// Lower the quantity of the given item by one, removing it at quantity
    /// 1. Unknown ids are a no-op and publish nothing.
    pub async fn decrement(&self, id: &ProductId) {
        let mut cart = self.cart.lock().await;
        if cart.decrement(id) {
            self.publish(&cart);
        }
    }

    /// Snapshot of the current product list.
    pub fn products(&self) -> Vec<Product> {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribe to cart changes.
    ///
    /// The receiver yields the full snapshot after every mutation that
    /// changed the list. The current snapshot is available immediately.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.snapshot_tx.subscribe()
    }

    /// Wait until every snapshot queued so far has been written (or dropped
    /// after exhausting its retries).
    pub async fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.persist_tx
            .send(PersistCommand::Flush(ack_tx))
            .ok()
            .context("persistence worker is gone")?;
        ack_rx.await.context("persistence worker dropped flush")?;
        Ok(())
    }

    fn publish(&self, cart: &Cart) {
        let snapshot = cart.snapshot();
        self.snapshot_tx.send_replace(snapshot.clone());
        if self
            .persist_tx
            .send(PersistCommand::Write(snapshot))
            .is_err()
        {
            warn!("persistence worker is gone, cart changes will not be saved");
        }
    }
}
