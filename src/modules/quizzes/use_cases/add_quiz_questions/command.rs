use crate::modules::quizzes::core::status::QuizStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOption {
    pub option_text: String,
    pub option_explanation: String,
    pub is_correct: bool,
}

/// A bank question offered to a quiz. Ids are assigned when it is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQuestion {
    pub question: String,
    pub question_type: String,
    pub content_entry_id: String,
    pub content_entry_type: String,
    pub content_entry_source_url: Option<String>,
    pub chunk_index: i32,
    pub question_index_in_chunk: i32,
    pub options: Vec<CandidateOption>,
}

impl CandidateQuestion {
    pub fn chunk_key(&self) -> (i32, i32, &str) {
        (
            self.chunk_index,
            self.question_index_in_chunk,
            self.content_entry_id.as_str(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddQuizQuestions {
    pub quiz_id: String,
    pub user_id: String,
    pub status: QuizStatus,
    pub questions: Vec<CandidateQuestion>,
    pub topics: Vec<String>,
    pub content_entries_count: i32,
    pub updated_at: i64,
}
