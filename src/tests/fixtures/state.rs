use crate::modules::quizzes::core::questions::{QuizQuestion, QuizQuestionOption};
use crate::modules::quizzes::core::state::Quiz;
use crate::modules::quizzes::core::status::QuizStatus;
use crate::tests::fixtures::events::quiz_created_v1::make_quiz_created_v1_event;

/// Question `question_id` of a fixture quiz. Options are numbered on from the previous
/// question, three per question, and the first one is correct.
pub fn make_quiz_question(question_id: i64) -> QuizQuestion {
    let first_option_id = (question_id - 1) * 3 + 1;
    QuizQuestion {
        question_id,
        question: format!("Question {question_id}"),
        question_type: "single_choice".to_string(),
        content_entry_id: "entry-1".to_string(),
        content_entry_type: "selected_text".to_string(),
        content_entry_source_url: Some("https://doc.rust-lang.org/book/".to_string()),
        chunk_index: 0,
        question_index_in_chunk: (question_id - 1) as i32,
        options: (first_option_id..first_option_id + 3)
            .map(|option_id| QuizQuestionOption {
                option_id,
                option_text: format!("Option {option_id}"),
                option_explanation: format!("Explanation {option_id}"),
                is_correct: option_id == first_option_id,
            })
            .collect(),
    }
}

pub struct QuizBuilder {
    inner: Quiz,
}

impl Default for QuizBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl QuizBuilder {
    pub fn new() -> Self {
        let created = make_quiz_created_v1_event();
        Self {
            inner: Quiz {
                quiz_id: created.quiz_id,
                user_id: created.user_id,
                content_bank_id: created.content_bank_id,
                bank_name: created.bank_name,
                status: created.status,
                topics: Vec::new(),
                questions: Vec::new(),
                responses: Vec::new(),
                content_entries_count: 0,
                questions_completed: 0,
                created_at: created.created_at,
                question_updated_at: None,
                completed_at: None,
            },
        }
    }

    pub fn with_questions(mut self, count: i64) -> Self {
        self.inner.questions = (1..=count).map(make_quiz_question).collect();
        self
    }

    pub fn questions_completed(mut self, v: i32) -> Self {
        self.inner.questions_completed = v;
        self
    }

    pub fn status(mut self, v: QuizStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn topics(mut self, v: Vec<String>) -> Self {
        self.inner.topics = v;
        self
    }

    pub fn build(self) -> Quiz {
        self.inner
    }
}
