use serde::{Deserialize, Serialize};

pub const SINGLE_CHOICE: &str = "single_choice";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: i64,
    pub option_text: String,
    pub option_explanation: String,
    pub is_correct: bool,
}

/// A generated question in the bank, tied to the content entry it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub content_entry_id: String,
    pub question: String,
    pub question_type: String,
    pub chunk_index: i32,
    pub question_index_in_chunk: i32,
    pub options: Vec<QuestionOption>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestionOption {
    pub option_text: String,
    pub option_explanation: String,
    pub is_correct: bool,
}

/// A question before the repository assigned ids to it and its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub content_entry_id: String,
    pub question: String,
    pub question_type: String,
    pub chunk_index: i32,
    pub question_index_in_chunk: i32,
    pub options: Vec<NewQuestionOption>,
    pub created_at: i64,
}
