use crate::modules::quizzes::core::status::QuizStatus;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct QuizCreatedV1 {
    pub quiz_id: String,
    pub user_id: String,
    pub content_bank_id: String,
    pub bank_name: String,
    pub status: QuizStatus,
    pub created_at: i64,
}
