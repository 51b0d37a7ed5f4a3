use crate::modules::quizzes::adapters::outbound::event_store::{commit, load_quiz};
use crate::modules::quizzes::core::decision::Decision;
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::use_cases::delete_quiz::decide::decide_delete;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct DeleteQuizHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> DeleteQuizHandler<TEventStore, TOutbox>
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

    pub async fn handle(&self, user_id: &str, quiz_id: &str) -> Result<(), ApplicationError> {
        let loaded = load_quiz(&*self.event_store, user_id, quiz_id).await?;
        match decide_delete(&loaded.state, now_millis()) {
            Decision::Accepted { events, intents } => {
                let deleted = !events.is_empty();
                commit(
                    &*self.event_store,
                    &*self.outbox,
                    user_id,
                    quiz_id,
                    loaded.version,
                    events,
                    intents,
                )
                .await?;
                if deleted {
                    tracing::info!(quiz_id, "quiz deleted");
                }
                Ok(())
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
