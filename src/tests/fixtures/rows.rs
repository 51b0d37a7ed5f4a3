use crate::modules::quizzes::core::questions::QuizQuestionResponse;
use crate::modules::quizzes::core::status::QuizStatus;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::projection::QuizRow;
use crate::tests::fixtures::state::make_quiz_question;

pub struct QuizRowBuilder {
    inner: QuizRow,
}

impl Default for QuizRowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl QuizRowBuilder {
    pub fn new() -> Self {
        Self {
            inner: QuizRow {
                quiz_id: "quiz-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                content_bank_id: "bank-fixed-0001".to_string(),
                bank_name: "Rust Book".to_string(),
                status: QuizStatus::Ready,
                topics: Vec::new(),
                questions: Vec::new(),
                responses: Vec::new(),
                questions_count: 0,
                questions_completed: 0,
                content_entries_count: 0,
                created_at: 1_700_000_000_000,
                question_updated_at: None,
                completed_at: None,
                last_applied_version: 1,
                last_event_id: None,
            },
        }
    }

    pub fn quiz_id(mut self, v: impl Into<String>) -> Self {
        self.inner.quiz_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn status(mut self, v: QuizStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn question_updated_at(mut self, v: Option<i64>) -> Self {
        self.inner.question_updated_at = v;
        self
    }

    pub fn topics(mut self, v: Vec<String>) -> Self {
        self.inner.topics = v;
        self
    }

    pub fn with_questions(mut self, count: i64) -> Self {
        self.inner.questions = (1..=count).map(make_quiz_question).collect();
        self.inner.questions_count = count as i32;
        self
    }

    /// Also moves `questions_completed` along.
    pub fn responses(mut self, v: Vec<QuizQuestionResponse>) -> Self {
        self.inner.questions_completed = v.len() as i32;
        self.inner.responses = v;
        self
    }

    pub fn build(self) -> QuizRow {
        self.inner
    }
}
