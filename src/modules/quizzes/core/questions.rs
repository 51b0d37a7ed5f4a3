use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestionOption {
    pub option_id: i64,
    pub option_text: String,
    pub option_explanation: String,
    pub is_correct: bool,
}

/// A question copied into a quiz. `question_id` is its 1-based position in the quiz, which is
/// also the answering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question_id: i64,
    pub question: String,
    pub question_type: String,
    pub content_entry_id: String,
    pub content_entry_type: String,
    pub content_entry_source_url: Option<String>,
    pub chunk_index: i32,
    pub question_index_in_chunk: i32,
    pub options: Vec<QuizQuestionOption>,
}

impl QuizQuestion {
    pub fn chunk_key(&self) -> (i32, i32, &str) {
        (
            self.chunk_index,
            self.question_index_in_chunk,
            self.content_entry_id.as_str(),
        )
    }

    pub fn correct_option(&self) -> Option<&QuizQuestionOption> {
        self.options.iter().find(|option| option.is_correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestionResponse {
    pub question_id: i64,
    pub option_id: i64,
    pub is_correct: bool,
    pub correct_answer: String,
    pub answered_at: i64,
}
