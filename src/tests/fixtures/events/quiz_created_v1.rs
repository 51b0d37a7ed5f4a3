use crate::modules::quizzes::core::events::v1::quiz_created::QuizCreatedV1;
use crate::modules::quizzes::core::status::QuizStatus;

/// Canonical creation event of "quiz-fixed-0001".
pub fn make_quiz_created_v1_event() -> QuizCreatedV1 {
    QuizCreatedV1 {
        quiz_id: "quiz-fixed-0001".to_string(),
        user_id: "user-fixed-0001".to_string(),
        content_bank_id: "bank-fixed-0001".to_string(),
        bank_name: "Rust Book".to_string(),
        status: QuizStatus::Prepare,
        created_at: 1_700_000_000_000,
    }
}
