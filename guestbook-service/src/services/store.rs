use crate::models::NameRecord;
use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::RwLock;

/// Persistence for guestbook entries.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait NameStore: Send + Sync {
    async fn insert(&self, record: NameRecord) -> Result<(), AppError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<NameRecord>, AppError>;

    /// Round-trip to the backing store, used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    /// Release connections. Called once after the server has drained.
    async fn shutdown(&self);
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryNameStore {
    records: RwLock<Vec<NameRecord>>,
}

impl InMemoryNameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NameStore for InMemoryNameStore {
    async fn insert(&self, record: NameRecord) -> Result<(), AppError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<NameRecord>, AppError> {
        Ok(self.records.read().await.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn shutdown(&self) {
        let count = self.records.read().await.len();
        tracing::info!(count, "Discarding in-memory guestbook entries");
    }
}
