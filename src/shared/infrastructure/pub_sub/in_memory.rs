use crate::shared::infrastructure::pub_sub::{PubSub, PubSubError};
use serde_json::Value as Json;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryPubSub {
    messages: Mutex<Vec<(String, Json)>>,
    is_offline: bool,
}

impl InMemoryPubSub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn messages_on(&self, channel: &str) -> Vec<Json> {
        self.messages
            .lock()
            .await
            .iter()
            .filter(|(name, _)| name == channel)
            .map(|(_, payload)| payload.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl PubSub for InMemoryPubSub {
    async fn publish(&self, channel: &str, payload: &Json) -> Result<(), PubSubError> {
        if self.is_offline {
            return Err(PubSubError::PublishFailed {
                channel: channel.to_string(),
                reason: "Pub/sub offline".into(),
            });
        }
        self.messages
            .lock()
            .await
            .push((channel.to_string(), payload.clone()));
        Ok(())
    }
}
