use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("stream {stream_id} belongs to another user")]
    Forbidden { stream_id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    pub events: Vec<E>,
    pub version: i64,
}

/// An event as it sits in the global log. `position` is unique and strictly increasing across
/// all streams, `version` is the 1-based index of the event inside its own stream.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEvent<E> {
    pub position: i64,
    pub user_id: String,
    pub stream_id: String,
    pub version: i64,
    pub occurred_at: i64,
    pub event: E,
}

#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    /// Unknown streams load as empty at version 0.
    async fn load(
        &self,
        user_id: &str,
        stream_id: &str,
    ) -> Result<LoadedStream<Event>, EventStoreError>;

    async fn append(
        &self,
        user_id: &str,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError>;

    async fn read_from(
        &self,
        after_position: i64,
        limit: usize,
    ) -> Result<Vec<StoredEvent<Event>>, EventStoreError>;
}

pub mod in_memory;
