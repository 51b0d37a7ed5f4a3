use crate::modules::quizzes::adapters::outbound::event_store::{commit, load_quiz};
use crate::modules::quizzes::core::decision::Decision;
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::use_cases::update_quiz_status::decide::{
    UpdateQuizStatus, decide_update_status,
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct UpdateQuizStatusHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> UpdateQuizStatusHandler<TEventStore, TOutbox>
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

    pub async fn handle(&self, command: UpdateQuizStatus) -> Result<(), ApplicationError> {
        let loaded = load_quiz(&*self.event_store, &command.user_id, &command.quiz_id).await?;
        let user_id = command.user_id.clone();
        let quiz_id = command.quiz_id.clone();
        let status = command.status;
        match decide_update_status(&loaded.state, command) {
            Decision::Accepted { events, intents } => {
                if events.is_empty() {
                    return Ok(());
                }
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
                tracing::info!(quiz_id = %quiz_id, status = status.as_str(), "quiz status updated");
                Ok(())
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
