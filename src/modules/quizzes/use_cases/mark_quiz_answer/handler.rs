use crate::modules::quizzes::adapters::outbound::event_store::{commit, load_quiz};
use crate::modules::quizzes::core::decision::{DecideError, Decision};
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::evolve::evolve;
use crate::modules::quizzes::core::state::QuizState;
use crate::modules::quizzes::use_cases::mark_quiz_answer::command::{
    MarkAnswerOutcome, MarkQuizAnswer,
};
use crate::modules::quizzes::use_cases::mark_quiz_answer::decide::decide_mark_answer;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub const ANSWER_RECORDED: &str = "Quiz updated successfully";

pub struct MarkQuizAnswerHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> MarkQuizAnswerHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>, outbox: Arc<TOutbox>) -> Self {
        Self {
            event_store,
            outbox,
        }
    }

    pub async fn handle(&self, command: MarkQuizAnswer) -> Result<MarkAnswerOutcome, ApplicationError> {
        let loaded = load_quiz(&*self.event_store, &command.user_id, &command.quiz_id).await?;
        let user_id = command.user_id.clone();
        let quiz_id = command.quiz_id.clone();
        match decide_mark_answer(&loaded.state, command) {
            Decision::Accepted { events, intents } => {
                let next = events.iter().cloned().fold(loaded.state, evolve);
                commit(
                    &*self.event_store,
                    &*self.outbox,
                    &user_id,
                    &quiz_id,
                    loaded.version,
                    events,
                    intents,
                )
                .await?;
                let QuizState::Active(quiz) = next else {
                    return Err(ApplicationError::Unexpected(format!(
                        "quiz {quiz_id} inactive after answer"
                    )));
                };
                let correct_option_id = (quiz.questions_completed as usize)
                    .checked_sub(1)
                    .and_then(|answered| quiz.questions.get(answered))
                    .and_then(|question| question.correct_option())
                    .map(|option| option.option_id);
                Ok(MarkAnswerOutcome {
                    message: ANSWER_RECORDED.to_string(),
                    success: true,
                    is_completed: quiz.completed_at.is_some(),
                    correct_option_id,
                })
            }
            Decision::Rejected {
                reason:
                    reason @ (DecideError::Completed
                    | DecideError::InvalidOption
                    | DecideError::MisconfiguredQuestion),
            } => {
                if reason == DecideError::MisconfiguredQuestion {
                    tracing::error!(quiz_id = %quiz_id, "current question has no correct option");
                }
                Ok(MarkAnswerOutcome {
                    message: reason.to_string(),
                    success: false,
                    is_completed: false,
                    correct_option_id: None,
                })
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}

#[cfg(test)]
mod mark_quiz_answer_handler_tests {
    use super::*;
    use crate::modules::quizzes::adapters::outbound::event_store::quiz_stream_id;
    use crate::modules::quizzes::core::events::v1::quiz_questions_added::QuizQuestionsAddedV1;
    use crate::modules::quizzes::core::status::QuizStatus;
    use crate::shared::infrastructure::event_store::EventStoreError;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::events::quiz_created_v1::make_quiz_created_v1_event;
    use crate::tests::fixtures::state::make_quiz_question;
    use rstest::{fixture, rstest};

    type Handler = MarkQuizAnswerHandler<InMemoryEventStore<QuizEvent>, InMemoryDomainOutbox>;

    #[fixture]
    fn before_each() -> Handler {
        let event_store = Arc::new(InMemoryEventStore::<QuizEvent>::new());
        futures::executor::block_on(event_store.append(
            "user-fixed-0001",
            &quiz_stream_id("quiz-fixed-0001"),
            0,
            &[
                QuizEvent::QuizCreatedV1(make_quiz_created_v1_event()),
                QuizEvent::QuizQuestionsAddedV1(QuizQuestionsAddedV1 {
                    quiz_id: "quiz-fixed-0001".into(),
                    topics: vec!["Rust".into()],
                    status: QuizStatus::Ready,
                    content_entries_count: 1,
                    questions: vec![make_quiz_question(1), make_quiz_question(2)],
                    updated_at: 1_700_000_100_000,
                }),
            ],
        ))
        .unwrap();
        MarkQuizAnswerHandler::new(event_store, Arc::new(InMemoryDomainOutbox::new()))
    }

    fn answer(option_id: i64) -> MarkQuizAnswer {
        MarkQuizAnswer {
            quiz_id: "quiz-fixed-0001".into(),
            user_id: "user-fixed-0001".into(),
            option_id,
            marked_at: 1_700_000_300_000,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_walk_the_quiz_to_completion(before_each: Handler) {
        let handler = before_each;
        let first = handler.handle(answer(2)).await.unwrap();
        assert!(first.success);
        assert!(!first.is_completed);
        assert_eq!(first.correct_option_id, Some(1));

        let second = handler.handle(answer(4)).await.unwrap();
        assert!(second.is_completed);
        assert_eq!(second.message, ANSWER_RECORDED);

        let third = handler.handle(answer(4)).await.unwrap();
        assert!(!third.success);
        assert_eq!(third.message, "Quiz is already completed");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_invalid_option_without_failing(before_each: Handler) {
        let outcome = before_each.handle(answer(99)).await.unwrap();
        assert_eq!(
            outcome,
            MarkAnswerOutcome {
                message: "Invalid question option selected".into(),
                success: false,
                is_completed: false,
                correct_option_id: None,
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_a_foreign_quiz(before_each: Handler) {
        let result = before_each
            .handle(MarkQuizAnswer {
                user_id: "intruder".into(),
                ..answer(1)
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_only_one_concurrent_answer_through(before_each: Handler) {
        let handler = before_each;
        handler.event_store.set_delay_append_ms(20);

        let (first, second) = tokio::join!(handler.handle(answer(1)), handler.handle(answer(1)));
        let results = [first, second];
        let accepted = results.iter().filter(|result| result.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|result| {
                matches!(
                    result,
                    Err(ApplicationError::VersionConflict(
                        EventStoreError::VersionMismatch {
                            expected: 2,
                            actual: 3
                        }
                    ))
                )
            })
            .count();
        assert_eq!(accepted, 1);
        assert_eq!(conflicts, 1);

        let stream = handler
            .event_store
            .load("user-fixed-0001", &quiz_stream_id("quiz-fixed-0001"))
            .await
            .unwrap();
        assert_eq!(stream.version, 3);
    }
}
