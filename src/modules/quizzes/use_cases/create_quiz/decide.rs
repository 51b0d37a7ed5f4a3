use crate::modules::quizzes::core::decision::{DecideError, Decision};
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::events::v1::quiz_created::QuizCreatedV1;
use crate::modules::quizzes::core::intents::{QuizGenerationRequest, QuizIntent};
use crate::modules::quizzes::core::state::QuizState;
use crate::modules::quizzes::use_cases::create_quiz::command::CreateQuiz;

pub fn decide_create(state: &QuizState, command: CreateQuiz) -> Decision {
    if !matches!(state, QuizState::None) {
        return Decision::reject(DecideError::AlreadyExists);
    }
    let created = QuizEvent::QuizCreatedV1(QuizCreatedV1 {
        quiz_id: command.quiz_id.clone(),
        user_id: command.user_id.clone(),
        content_bank_id: command.content_bank_id.clone(),
        bank_name: command.bank_name.clone(),
        status: command.initial_status(),
        created_at: command.created_at,
    });
    Decision::Accepted {
        events: vec![created.clone()],
        intents: vec![
            QuizIntent::PublishQuizEvent { event: created },
            QuizIntent::RequestQuestionGeneration {
                payload: QuizGenerationRequest {
                    instructions: command.instructions,
                    content_entries: command.content_entries,
                    entries_skipped: command.entries_skipped,
                    quiz_id: command.quiz_id,
                    user_id: command.user_id,
                    bank_id: command.content_bank_id,
                },
            },
        ],
    }
}
