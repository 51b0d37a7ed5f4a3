use crate::modules::quizzes::core::intents::GenerationContentEntry;
use crate::modules::quizzes::core::status::QuizStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQuiz {
    pub quiz_id: String,
    pub user_id: String,
    pub content_bank_id: String,
    pub bank_name: String,
    pub instructions: String,
    /// Entries still waiting for generated questions.
    pub content_entries: Vec<GenerationContentEntry>,
    pub entries_skipped: i32,
    pub created_at: i64,
}

impl CreateQuiz {
    /// READY when nothing is left to generate.
    pub fn initial_status(&self) -> QuizStatus {
        if self.content_entries.is_empty() {
            QuizStatus::Ready
        } else {
            QuizStatus::Prepare
        }
    }
}
