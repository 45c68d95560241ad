//! Write-behind persistence worker
//!
//! Mutations enqueue full cart snapshots; the worker drains the queue,
//! keeps only the latest snapshot, and writes it through the repository
//! port. Intermediate snapshots may never reach storage, the latest one
//! always does (last write wins). A failed write is retried a configured
//! number of times, then dropped with an error log; in-memory state is
//! never touched by a storage failure.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, warn};

use cart_core::cart::Product;
use cart_core::ports::CartRepositoryPort;

const RETRY_DELAY: Duration = Duration::from_millis(50);

pub(crate) enum PersistCommand {
    Write(Vec<Product>),
    Flush(oneshot::Sender<()>),
}

pub(crate) struct PersistWorker {
    repository: Arc<dyn CartRepositoryPort>,
    write_retries: u32,
}

impl PersistWorker {
    pub(crate) fn new(repository: Arc<dyn CartRepositoryPort>, write_retries: u32) -> Self {
        Self {
            repository,
            write_retries,
        }
    }

    pub(crate) async fn run(self, mut rx: mpsc::UnboundedReceiver<PersistCommand>) {
        while let Some(command) = rx.recv().await {
            match command {
                PersistCommand::Write(snapshot) => {
                    let mut latest = snapshot;
                    let mut flush_ack = None;

                    // Coalesce: everything already queued is stale except the
                    // newest snapshot.
                    while let Ok(next) = rx.try_recv() {
                        match next {
                            PersistCommand::Write(snapshot) => latest = snapshot,
                            PersistCommand::Flush(ack) => {
                                flush_ack = Some(ack);
                                break;
                            }
                        }
                    }

                    self.write_with_retry(&latest).await;

                    if let Some(ack) = flush_ack {
                        let _ = ack.send(());
                    }
                }
                PersistCommand::Flush(ack) => {
                    let _ = ack.send(());
                }
            }
        }

        debug!("persistence queue closed, worker exiting");
    }

    async fn write_with_retry(&self, snapshot: &[Product]) {
        let mut attempt = 0;
        loop {
            match self.repository.save(snapshot).await {
                Ok(()) => {
                    debug!(items = snapshot.len(), "cart snapshot persisted");
                    return;
                }
                Err(e) if attempt < self.write_retries => {
                    attempt += 1;
                    warn!(error = %e, attempt, "cart write failed, retrying");
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(e) => {
                    error!(error = %e, "cart write failed, dropping snapshot");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use cart_core::cart::ProductId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingRepository {
        saved: Mutex<Option<Vec<Product>>>,
        save_count: AtomicUsize,
        failures_remaining: AtomicUsize,
    }

    impl RecordingRepository {
        fn new() -> Self {
            Self::failing_first(0)
        }

        fn failing_first(failures: usize) -> Self {
            Self {
                saved: Mutex::new(None),
                save_count: AtomicUsize::new(0),
                failures_remaining: AtomicUsize::new(failures),
            }
        }

        fn save_count(&self) -> usize {
            self.save_count.load(Ordering::SeqCst)
        }

        fn saved(&self) -> Option<Vec<Product>> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CartRepositoryPort for RecordingRepository {
        async fn load(&self) -> Result<Option<Vec<Product>>> {
            Ok(None)
        }

        async fn save(&self, products: &[Product]) -> Result<()> {
            self.save_count.fetch_add(1, Ordering::SeqCst);
            if self
                .failures_remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                anyhow::bail!("storage unavailable");
            }
            *self.saved.lock().unwrap() = Some(products.to_vec());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.saved.lock().unwrap() = None;
            Ok(())
        }
    }

    fn snapshot(id: &str, quantity: u32) -> Vec<Product> {
        vec![Product {
            id: ProductId::from(id),
            title: format!("Product {id}"),
            image_url: String::new(),
            price: 1.0,
            quantity,
        }]
    }

    #[tokio::test]
    async fn test_queued_writes_coalesce_to_latest() {
        let repo = Arc::new(RecordingRepository::new());
        let (tx, rx) = mpsc::unbounded_channel();

        // Queue everything before the worker starts so the drain is
        // deterministic.
        for quantity in 1..=5 {
            tx.send(PersistCommand::Write(snapshot("A", quantity))).unwrap();
        }
        let (ack_tx, ack_rx) = oneshot::channel();
        tx.send(PersistCommand::Flush(ack_tx)).unwrap();

        tokio::spawn(PersistWorker::new(repo.clone(), 0).run(rx));
        ack_rx.await.unwrap();

        assert_eq!(repo.save_count(), 1);
        assert_eq!(repo.saved(), Some(snapshot("A", 5)));
    }

    #[tokio::test]
    async fn test_failed_write_is_retried() {
        let repo = Arc::new(RecordingRepository::failing_first(2));
        let (tx, rx) = mpsc::unbounded_channel();

        tx.send(PersistCommand::Write(snapshot("A", 1))).unwrap();
        let (ack_tx, ack_rx) = oneshot::channel();
        tx.send(PersistCommand::Flush(ack_tx)).unwrap();

        tokio::spawn(PersistWorker::new(repo.clone(), 2).run(rx));
        ack_rx.await.unwrap();

        assert_eq!(repo.save_count(), 3);
        assert_eq!(repo.saved(), Some(snapshot("A", 1)));
    }

    #[tokio::test]
    async fn test_exhausted_retries_drop_the_snapshot() {
        let repo = Arc::new(RecordingRepository::failing_first(10));
        let (tx, rx) = mpsc::unbounded_channel();

        tx.send(PersistCommand::Write(snapshot("A", 1))).unwrap();
        let (ack_tx, ack_rx) = oneshot::channel();
        tx.send(PersistCommand::Flush(ack_tx)).unwrap();

        tokio::spawn(PersistWorker::new(repo.clone(), 1).run(rx));
        ack_rx.await.unwrap();

        // One attempt plus one retry, then the snapshot is dropped.
        assert_eq!(repo.save_count(), 2);
        assert_eq!(repo.saved(), None);
    }

    #[tokio::test]
    async fn test_flush_on_idle_queue_acks_immediately() {
        let repo = Arc::new(RecordingRepository::new());
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(PersistWorker::new(repo.clone(), 0).run(rx));

        let (ack_tx, ack_rx) = oneshot::channel();
        tx.send(PersistCommand::Flush(ack_tx)).unwrap();
        ack_rx.await.unwrap();

        assert_eq!(repo.save_count(), 0);
    }
}
