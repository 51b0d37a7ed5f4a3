use crate::modules::questions::core::question::{NewQuestion, NewQuestionOption, SINGLE_CHOICE};

pub struct NewQuestionBuilder {
    inner: NewQuestion,
}

impl Default for NewQuestionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewQuestionBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewQuestion {
                content_entry_id: "entry-fixed-0001".to_string(),
                question: "Which binding owns the value after a move?".to_string(),
                question_type: SINGLE_CHOICE.to_string(),
                chunk_index: 0,
                question_index_in_chunk: 0,
                options: vec![
                    NewQuestionOption {
                        option_text: "The new binding".to_string(),
                        option_explanation: "A move transfers ownership".to_string(),
                        is_correct: true,
                    },
                    NewQuestionOption {
                        option_text: "The old binding".to_string(),
                        option_explanation: "It is no longer valid".to_string(),
                        is_correct: false,
                    },
                    NewQuestionOption {
                        option_text: "Both".to_string(),
                        option_explanation: "Values have a single owner".to_string(),
                        is_correct: false,
                    },
                ],
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn content_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.content_entry_id = v.into();
        self
    }

    pub fn chunk_index(mut self, v: i32) -> Self {
        self.inner.chunk_index = v;
        self
    }

    pub fn question_index_in_chunk(mut self, v: i32) -> Self {
        self.inner.question_index_in_chunk = v;
        self
    }

    pub fn build(self) -> NewQuestion {
        self.inner
    }
}
