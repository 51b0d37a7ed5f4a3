use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::state::{Quiz, QuizState};
use crate::modules::quizzes::core::status::QuizStatus;

pub fn evolve(state: QuizState, event: QuizEvent) -> QuizState {
    match (state, event) {
        (QuizState::None, QuizEvent::QuizCreatedV1(e)) => QuizState::Active(Quiz {
            quiz_id: e.quiz_id,
            user_id: e.user_id,
            content_bank_id: e.content_bank_id,
            bank_name: e.bank_name,
            status: e.status,
            topics: Vec::new(),
            questions: Vec::new(),
            responses: Vec::new(),
            content_entries_count: 0,
            questions_completed: 0,
            created_at: e.created_at,
            question_updated_at: None,
            completed_at: None,
        }),
        (QuizState::Active(mut quiz), QuizEvent::QuizQuestionsAddedV1(e)) => {
            for topic in e.topics {
                if !quiz.topics.contains(&topic) {
                    quiz.topics.push(topic);
                }
            }
            quiz.questions.extend(e.questions);
            quiz.status = e.status;
            quiz.content_entries_count = e.content_entries_count;
            quiz.question_updated_at = Some(e.updated_at);
            QuizState::Active(quiz)
        }
        (QuizState::Active(mut quiz), QuizEvent::QuizStatusUpdatedV1(e)) => {
            quiz.status = e.status;
            QuizState::Active(quiz)
        }
        (QuizState::Active(mut quiz), QuizEvent::QuizAnswerMarkedV1(e)) => {
            quiz.responses.push(e.response);
            quiz.questions_completed += 1;
            if e.all_questions_marked && quiz.status == QuizStatus::Ready {
                quiz.completed_at = Some(e.marked_at);
            }
            QuizState::Active(quiz)
        }
        (QuizState::Active(quiz), QuizEvent::QuizDeletedV1(_)) => QuizState::Deleted {
            quiz_id: quiz.quiz_id,
        },
        (state, _) => state,
    }
}
