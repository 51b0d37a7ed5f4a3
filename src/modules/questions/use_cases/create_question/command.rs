use crate::modules::questions::core::question::NewQuestionOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQuestion {
    pub content_entry_id: String,
    pub question: String,
    pub chunk_index: i32,
    pub question_index_in_chunk: i32,
    pub options: Vec<NewQuestionOption>,
}
