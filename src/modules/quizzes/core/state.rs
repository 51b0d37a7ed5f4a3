use crate::modules::quizzes::core::questions::{QuizQuestion, QuizQuestionResponse};
use crate::modules::quizzes::core::status::QuizStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub quiz_id: String,
    pub user_id: String,
    pub content_bank_id: String,
    pub bank_name: String,
    pub status: QuizStatus,
    pub topics: Vec<String>,
    pub questions: Vec<QuizQuestion>,
    pub responses: Vec<QuizQuestionResponse>,
    pub content_entries_count: i32,
    pub questions_completed: i32,
    pub created_at: i64,
    pub question_updated_at: Option<i64>,
    pub completed_at: Option<i64>,
}

impl Quiz {
    pub fn questions_count(&self) -> i32 {
        self.questions.len() as i32
    }

    /// Every question currently in the quiz has been answered.
    pub fn all_questions_marked(&self) -> bool {
        self.questions_completed >= self.questions_count()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.questions_completed as usize)
    }

    pub fn next_option_id(&self) -> i64 {
        self.questions
            .iter()
            .flat_map(|question| question.options.iter())
            .map(|option| option.option_id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    None,
    Active(Quiz),
    Deleted { quiz_id: String },
}

#[cfg(test)]
mod quiz_state_tests {
    use crate::tests::fixtures::state::QuizBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_point_at_the_first_unanswered_question() {
        let quiz = QuizBuilder::new().with_questions(3).questions_completed(1).build();
        assert_eq!(quiz.current_question().unwrap().question_id, 2);
        assert!(!quiz.all_questions_marked());
    }

    #[rstest]
    fn it_should_have_no_current_question_once_all_are_marked() {
        let quiz = QuizBuilder::new().with_questions(2).questions_completed(2).build();
        assert!(quiz.current_question().is_none());
        assert!(quiz.all_questions_marked());
    }

    #[rstest]
    fn it_should_continue_option_ids_after_the_highest_one() {
        let empty = QuizBuilder::new().build();
        assert_eq!(empty.next_option_id(), 1);
        let quiz = QuizBuilder::new().with_questions(2).build();
        assert_eq!(quiz.next_option_id(), 7);
    }
}
