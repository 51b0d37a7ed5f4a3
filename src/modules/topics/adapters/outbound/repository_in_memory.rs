use crate::modules::topics::adapters::outbound::repository::TopicRepository;
use crate::modules::topics::core::topic::Topic;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTopicRepository {
    topics: RwLock<Vec<Topic>>,
    is_offline: bool,
}

impl InMemoryTopicRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Topic repository offline");
        }
        Ok(())
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicRepository {
    async fn find_by_name(&self, user_id: &str, name: &str) -> anyhow::Result<Option<Topic>> {
        self.ensure_online()?;
        Ok(self
            .topics
            .read()
            .await
            .iter()
            .find(|topic| topic.user_id == user_id && topic.name == name)
            .cloned())
    }

    async fn find_by_ids(&self, user_id: &str, ids: &[String]) -> anyhow::Result<Vec<Topic>> {
        self.ensure_online()?;
        Ok(self
            .topics
            .read()
            .await
            .iter()
            .filter(|topic| topic.user_id == user_id && ids.contains(&topic.id))
            .cloned()
            .collect())
    }

    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Topic>> {
        self.ensure_online()?;
        let mut topics: Vec<Topic> = self
            .topics
            .read()
            .await
            .iter()
            .filter(|topic| topic.user_id == user_id)
            .cloned()
            .collect();
        topics.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(topics)
    }

    async fn insert(&self, topic: Topic) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.topics.write().await;
        if guard
            .iter()
            .any(|existing| existing.user_id == topic.user_id && existing.name == topic.name)
        {
            anyhow::bail!("Topic {} already exists for user {}", topic.name, topic.user_id);
        }
        guard.push(topic);
        Ok(())
    }
}
