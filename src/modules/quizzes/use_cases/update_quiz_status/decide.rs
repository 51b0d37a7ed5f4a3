use crate::modules::quizzes::core::decision::{DecideError, Decision};
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::events::v1::quiz_status_updated::QuizStatusUpdatedV1;
use crate::modules::quizzes::core::state::QuizState;
use crate::modules::quizzes::core::status::QuizStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateQuizStatus {
    pub quiz_id: String,
    pub user_id: String,
    pub status: QuizStatus,
    pub updated_at: i64,
}

pub fn decide_update_status(state: &QuizState, command: UpdateQuizStatus) -> Decision {
    match state {
        QuizState::None => Decision::reject(DecideError::NotFound),
        QuizState::Deleted { .. } => Decision::reject(DecideError::Deleted),
        QuizState::Active(quiz) if quiz.status == command.status => Decision::unchanged(),
        QuizState::Active(quiz) => {
            Decision::record(QuizEvent::QuizStatusUpdatedV1(QuizStatusUpdatedV1 {
                quiz_id: quiz.quiz_id.clone(),
                status: command.status,
                updated_at: command.updated_at,
            }))
        }
    }
}
