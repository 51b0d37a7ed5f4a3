use crate::modules::quizzes::use_cases::list_quizzes_by_user::projection::QuizRow;
use async_trait::async_trait;

#[async_trait]
pub trait QuizProjectionRepository: Send + Sync {
    async fn get(&self, quiz_id: &str) -> anyhow::Result<Option<QuizRow>>;
    async fn upsert(&self, row: QuizRow) -> anyhow::Result<()>;
    async fn delete(&self, quiz_id: &str) -> anyhow::Result<()>;
}

/// Last global log position a projector has applied.
#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<i64>>;
    async fn set(&self, name: &str, position: i64) -> anyhow::Result<()>;
}
