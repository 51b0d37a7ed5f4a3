use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct OutboxRow {
    pub topic: String,
    pub key: String,
    pub event_type: String,
    pub event_version: i32,
    pub stream_id: String,
    pub stream_version: i64,
    pub occurred_at: i64,
    pub payload: Json,
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox row {event_type} for stream {stream_id} v{stream_version}")]
    Duplicate {
        stream_id: String,
        stream_version: i64,
        event_type: String,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("transient backend error: {0}")]
    Transient(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;

    /// Undispatched rows, oldest first.
    async fn pending(&self, limit: usize) -> Result<Vec<OutboxRow>, OutboxError>;

    async fn mark_dispatched(
        &self,
        stream_id: &str,
        stream_version: i64,
        event_type: &str,
    ) -> Result<(), OutboxError>;
}

pub mod in_memory;
pub mod relay;
