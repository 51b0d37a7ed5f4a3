use crate::shared::infrastructure::event_bus::{EventBus, EventBusError};
use serde_json::Value as Json;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct PublishedMessage {
    pub topic: String,
    pub key: String,
    pub payload: Json,
}

#[derive(Default)]
pub struct InMemoryEventBus {
    published: Mutex<Vec<PublishedMessage>>,
    is_offline: bool,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn published(&self) -> Vec<PublishedMessage> {
        self.published.lock().await.clone()
    }

    pub async fn published_to(&self, topic: &str) -> Vec<PublishedMessage> {
        self.published
            .lock()
            .await
            .iter()
            .filter(|message| message.topic == topic)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, topic: &str, key: &str, payload: &Json) -> Result<(), EventBusError> {
        if self.is_offline {
            return Err(EventBusError::PublishFailed {
                topic: topic.to_string(),
                reason: "Event bus offline".into(),
            });
        }
        self.published.lock().await.push(PublishedMessage {
            topic: topic.to_string(),
            key: key.to_string(),
            payload: payload.clone(),
        });
        Ok(())
    }
}
