use crate::modules::topics::adapters::outbound::repository::TopicRepository;
use crate::modules::topics::core::topic::Topic;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

pub struct ListTopicsByUserHandler {
    repository: Arc<dyn TopicRepository>,
}

impl ListTopicsByUserHandler {
    pub fn new(repository: Arc<dyn TopicRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &str) -> Result<Vec<Topic>, ApplicationError> {
        Ok(self.repository.list_by_user(user_id).await?)
    }

    pub async fn find_by_ids(
        &self,
        user_id: &str,
        ids: &[String],
    ) -> Result<Vec<Topic>, ApplicationError> {
        Ok(self.repository.find_by_ids(user_id, ids).await?)
    }
}
