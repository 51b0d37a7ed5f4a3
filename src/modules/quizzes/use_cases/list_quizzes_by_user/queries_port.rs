use crate::modules::quizzes::use_cases::list_quizzes_by_user::projection::QuizRow;
use async_trait::async_trait;

#[async_trait]
pub trait QuizQueries {
    async fn find_by_id(&self, user_id: &str, quiz_id: &str) -> anyhow::Result<Option<QuizRow>>;

    /// Newest first.
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<QuizRow>>;

    /// Quizzes still PREPARE or IN_PROGRESS as stored, stale or not.
    async fn list_generating_by_user_id(&self, user_id: &str) -> anyhow::Result<Vec<QuizRow>>;
}
