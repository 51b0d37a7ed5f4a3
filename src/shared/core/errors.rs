use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use thiserror::Error;

/// Error surface of every use case handler.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("repository error: {0}")]
    Repository(#[from] anyhow::Error),

    #[error("unexpected: {0}")]
    Unexpected(String),
}
