// Ephemeral fan-out port. Messages are fire-and-forget notifications for connected clients,
// nothing replays them.

use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PubSubError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("publish to {channel} failed: {reason}")]
    PublishFailed { channel: String, reason: String },
}

#[async_trait]
pub trait PubSub: Send + Sync {
    async fn publish(&self, channel: &str, payload: &Json) -> Result<(), PubSubError>;
}

/// Per-user channel, e.g. `quiz-generation:user-id:42`.
pub fn user_channel(prefix: &str, user_id: &str) -> String {
    format!("{prefix}:user-id:{user_id}")
}

pub mod in_memory;
pub mod redis_pub_sub;
