use crate::modules::quizzes::core::status::QuizStatus;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct QuizStatusUpdatedV1 {
    pub quiz_id: String,
    pub status: QuizStatus,
    pub updated_at: i64,
}
