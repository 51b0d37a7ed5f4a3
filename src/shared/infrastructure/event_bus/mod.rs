// Durable messaging port.
//
// Outbound: the outbox relay publishes rows through an EventBus.
// Inbound: a consumer loop hands every raw message to a MessageHandler, which owns parsing.

use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventBusError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("publish to {topic} failed: {reason}")]
    PublishFailed { topic: String, reason: String },

    #[error("subscription to {topics:?} failed: {reason}")]
    SubscriptionFailed { topics: Vec<String>, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub topic: String,
    pub key: Option<String>,
    pub payload: String,
}

#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, topic: &str, key: &str, payload: &Json) -> Result<(), EventBusError>;
}

#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle(&self, message: InboundMessage) -> anyhow::Result<()>;
}

pub mod in_memory;
pub mod integration_event;
pub mod kafka;
