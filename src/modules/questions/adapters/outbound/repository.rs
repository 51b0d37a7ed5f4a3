use crate::modules::questions::core::question::{NewQuestion, Question};
use async_trait::async_trait;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Stores the question and assigns ids to it and its options.
    async fn insert(&self, question: NewQuestion) -> anyhow::Result<Question>;

    /// Ordered by question id.
    async fn find_by_content_entry_ids(&self, ids: &[String]) -> anyhow::Result<Vec<Question>>;

    async fn delete_by_content_entry_id(&self, content_entry_id: &str) -> anyhow::Result<()>;
}
