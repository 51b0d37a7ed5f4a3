use crate::modules::quizzes::adapters::outbound::event_store::{commit, load_quiz};
use crate::modules::quizzes::core::decision::Decision;
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::use_cases::add_quiz_questions::command::AddQuizQuestions;
use crate::modules::quizzes::use_cases::add_quiz_questions::decide::decide_add_questions;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct AddQuizQuestionsHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> AddQuizQuestionsHandler<TEventStore, TOutbox>
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

    /// Returns the stream version after the command.
    pub async fn handle(&self, command: AddQuizQuestions) -> Result<i64, ApplicationError> {
        let loaded = load_quiz(&*self.event_store, &command.user_id, &command.quiz_id).await?;
        let user_id = command.user_id.clone();
        let quiz_id = command.quiz_id.clone();
        match decide_add_questions(&loaded.state, command) {
            Decision::Accepted { events, intents } => {
                let added = events.len();
                let version = commit(
                    &*self.event_store,
                    &*self.outbox,
                    &user_id,
                    &quiz_id,
                    loaded.version,
                    events,
                    intents,
                )
                .await?;
                if added > 0 {
                    tracing::debug!(quiz_id = %quiz_id, version, "quiz questions added");
                }
                Ok(version)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
