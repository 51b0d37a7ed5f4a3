use crate::modules::topics::adapters::outbound::repository::TopicRepository;
use crate::modules::topics::core::topic::{Topic, normalize_topic_name};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::{new_id, now_millis};
use std::sync::Arc;

pub const BLANK_TOPIC_NAME: &str = "Topic name must not be blank";

pub struct FindOrCreateTopicHandler {
    repository: Arc<dyn TopicRepository>,
}

impl FindOrCreateTopicHandler {
    pub fn new(repository: Arc<dyn TopicRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &str, name: &str) -> Result<Topic, ApplicationError> {
        let name = normalize_topic_name(name)
            .ok_or_else(|| ApplicationError::Domain(BLANK_TOPIC_NAME.into()))?;
        if let Some(existing) = self.repository.find_by_name(user_id, &name).await? {
            return Ok(existing);
        }
        let topic = Topic {
            id: new_id(),
            user_id: user_id.to_string(),
            name,
            created_at: now_millis(),
        };
        if let Err(error) = self.repository.insert(topic.clone()).await {
            // Lost a race against a concurrent insert of the same name.
            return match self.repository.find_by_name(user_id, &topic.name).await? {
                Some(existing) => Ok(existing),
                None => Err(ApplicationError::Repository(error)),
            };
        }
        tracing::debug!(user_id, topic = %topic.name, "topic created");
        Ok(topic)
    }
}
