use crate::modules::quizzes::use_cases::list_quizzes_by_user::projection::QuizView;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::queries_port::QuizQueries;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::now_millis;
use std::sync::Arc;

pub struct ListQuizzesByUserHandler<TQueries>
where
    TQueries: QuizQueries + Send + Sync + 'static,
{
    queries: Arc<TQueries>,
}

impl<TQueries> ListQuizzesByUserHandler<TQueries>
where
    TQueries: QuizQueries + Send + Sync + 'static,
{
    pub fn new(queries: Arc<TQueries>) -> Self {
        Self { queries }
    }

    /// One page of the user's quizzes, newest first.
    pub async fn handle(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<QuizView>, ApplicationError> {
        let now = now_millis();
        Ok(self
            .queries
            .list_by_user_id(user_id, offset, limit)
            .await?
            .into_iter()
            .map(|row| QuizView::from_row(row, now))
            .collect())
    }
}
