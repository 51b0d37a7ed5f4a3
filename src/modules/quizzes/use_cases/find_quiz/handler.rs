use crate::modules::quizzes::core::decision::DecideError;
use crate::modules::quizzes::use_cases::find_quiz::view::{
    QuizDetailView, QuizResponseView, QuizSummaryView,
};
use crate::modules::quizzes::use_cases::list_quizzes_by_user::projection::QuizRow;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::queries_port::QuizQueries;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::now_millis;
use std::sync::Arc;

/// Read side of a single quiz, served from the projection.
pub struct FindQuizHandler<TQueries>
where
    TQueries: QuizQueries + Send + Sync + 'static,
{
    queries: Arc<TQueries>,
}

impl<TQueries> FindQuizHandler<TQueries>
where
    TQueries: QuizQueries + Send + Sync + 'static,
{
    pub fn new(queries: Arc<TQueries>) -> Self {
        Self { queries }
    }

    async fn row(&self, user_id: &str, quiz_id: &str) -> Result<QuizRow, ApplicationError> {
        self.queries
            .find_by_id(user_id, quiz_id)
            .await?
            .ok_or_else(|| ApplicationError::from(DecideError::NotFound))
    }

    pub async fn find_one(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> Result<QuizDetailView, ApplicationError> {
        let row = self.row(user_id, quiz_id).await?;
        Ok(QuizDetailView::from_row(row, now_millis()))
    }

    /// Answered questions in answering order.
    pub async fn find_responses(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> Result<Vec<QuizResponseView>, ApplicationError> {
        let row = self.row(user_id, quiz_id).await?;
        let mut views = Vec::with_capacity(row.responses.len());
        for response in &row.responses {
            let Some(question) = row
                .questions
                .iter()
                .find(|question| question.question_id == response.question_id)
            else {
                tracing::warn!(quiz_id, question_id = response.question_id, "response without question");
                continue;
            };
            let chosen = question
                .options
                .iter()
                .find(|option| option.option_id == response.option_id);
            let correct = question.correct_option();
            views.push(QuizResponseView {
                question_id: question.question_id,
                question: question.question.clone(),
                is_correct: response.is_correct,
                answer: chosen.map(|option| option.option_text.clone()).unwrap_or_default(),
                correct_answer: response.correct_answer.clone(),
                explanation: correct
                    .map(|option| option.option_explanation.clone())
                    .unwrap_or_default(),
                source_url: question.content_entry_source_url.clone(),
            });
        }
        Ok(views)
    }

    pub async fn find_summary(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> Result<QuizSummaryView, ApplicationError> {
        let row = self.row(user_id, quiz_id).await?;
        let correct_answers_count = row
            .responses
            .iter()
            .filter(|response| response.is_correct)
            .count() as i32;
        Ok(QuizSummaryView {
            quiz_id: row.quiz_id,
            bank_name: row.bank_name,
            topics: row.topics,
            questions_count: row.questions_count,
            questions_completed: row.questions_completed,
            correct_answers_count,
        })
    }
}
