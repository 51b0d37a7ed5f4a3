use crate::modules::quizzes::core::decision::{DecideError, Decision};
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::events::v1::quiz_deleted::QuizDeletedV1;
use crate::modules::quizzes::core::state::QuizState;

pub fn decide_delete(state: &QuizState, deleted_at: i64) -> Decision {
    match state {
        QuizState::None => Decision::reject(DecideError::NotFound),
        QuizState::Deleted { .. } => Decision::unchanged(),
        QuizState::Active(quiz) => Decision::record(QuizEvent::QuizDeletedV1(QuizDeletedV1 {
            quiz_id: quiz.quiz_id.clone(),
            deleted_at,
        })),
    }
}
