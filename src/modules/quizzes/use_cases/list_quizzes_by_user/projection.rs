use crate::modules::quizzes::core::questions::{QuizQuestion, QuizQuestionResponse};
use crate::modules::quizzes::core::status::QuizStatus;

/// Denormalized quiz read model. One row per quiz, rebuilt from the quiz stream.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizRow {
    pub quiz_id: String,
    pub user_id: String,
    pub content_bank_id: String,
    pub bank_name: String,
    pub status: QuizStatus,
    pub topics: Vec<String>,
    pub questions: Vec<QuizQuestion>,
    pub responses: Vec<QuizQuestionResponse>,
    pub questions_count: i32,
    pub questions_completed: i32,
    pub content_entries_count: i32,
    pub created_at: i64,
    pub question_updated_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub last_applied_version: i64,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizView {
    pub quiz_id: String,
    pub content_bank_id: String,
    pub bank_name: String,
    pub status: QuizStatus,
    pub topics: Vec<String>,
    pub questions_count: i32,
    pub questions_completed: i32,
    pub content_entries_count: i32,
    pub created_at: i64,
    pub completed_at: Option<i64>,
}

impl QuizView {
    /// `now` resolves stale generation into READY_WITH_ERROR.
    pub fn from_row(row: QuizRow, now: i64) -> Self {
        Self {
            status: row.status.effective(row.question_updated_at, now),
            quiz_id: row.quiz_id,
            content_bank_id: row.content_bank_id,
            bank_name: row.bank_name,
            topics: row.topics,
            questions_count: row.questions_count,
            questions_completed: row.questions_completed,
            content_entries_count: row.content_entries_count,
            created_at: row.created_at,
            completed_at: row.completed_at,
        }
    }
}
