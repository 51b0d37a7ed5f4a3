use crate::modules::topics::core::topic::Topic;
use async_trait::async_trait;

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn find_by_name(&self, user_id: &str, name: &str) -> anyhow::Result<Option<Topic>>;

    /// Unknown ids and topics of other users are left out.
    async fn find_by_ids(&self, user_id: &str, ids: &[String]) -> anyhow::Result<Vec<Topic>>;

    /// Ordered by name.
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Topic>>;

    /// Fails when the user already has a topic with the same name.
    async fn insert(&self, topic: Topic) -> anyhow::Result<()>;
}
