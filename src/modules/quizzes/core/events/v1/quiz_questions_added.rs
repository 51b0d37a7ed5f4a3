use crate::modules::quizzes::core::questions::QuizQuestion;
use crate::modules::quizzes::core::status::QuizStatus;

/// Carries only the questions and topics that are new to the quiz.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct QuizQuestionsAddedV1 {
    pub quiz_id: String,
    pub topics: Vec<String>,
    pub status: QuizStatus,
    pub content_entries_count: i32,
    pub questions: Vec<QuizQuestion>,
    pub updated_at: i64,
}
