use crate::shared::infrastructure::processed_events::ProcessedEventRepository;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedEvent {
    pub user_id: String,
    pub event_type: String,
}

#[derive(Default)]
pub struct InMemoryProcessedEvents {
    events: RwLock<HashMap<String, ProcessedEvent>>,
}

impl InMemoryProcessedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, event_id: &str) -> Option<ProcessedEvent> {
        self.events.read().await.get(event_id).cloned()
    }
}

#[async_trait::async_trait]
impl ProcessedEventRepository for InMemoryProcessedEvents {
    async fn is_processed(&self, event_id: &str) -> anyhow::Result<bool> {
        Ok(self.events.read().await.contains_key(event_id))
    }

    async fn mark_processed(
        &self,
        event_id: &str,
        user_id: &str,
        event_type: &str,
    ) -> anyhow::Result<()> {
        self.events.write().await.insert(
            event_id.to_string(),
            ProcessedEvent {
                user_id: user_id.to_string(),
                event_type: event_type.to_string(),
            },
        );
        Ok(())
    }
}
