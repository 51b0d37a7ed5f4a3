use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::adapters::outbound::state_store::commit;
use crate::modules::content_entries::core::decision::Decision;
use crate::modules::content_entries::use_cases::mark_questions_generated::decide::decide_mark_questions_generated;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct MarkQuestionsGeneratedHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    entries: Arc<dyn ContentEntryRepository>,
    outbox: Arc<TOutbox>,
}

impl<TOutbox> MarkQuestionsGeneratedHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(entries: Arc<dyn ContentEntryRepository>, outbox: Arc<TOutbox>) -> Self {
        Self { entries, outbox }
    }

    pub async fn handle(&self, content_entry_id: &str) -> Result<(), ApplicationError> {
        let current = self.entries.get(content_entry_id).await?;
        match decide_mark_questions_generated(current.as_ref(), now_millis()) {
            Decision::Accepted { events, intents } => {
                if events.is_empty() {
                    return Ok(());
                }
                commit(
                    &*self.entries,
                    &*self.outbox,
                    content_entry_id,
                    current,
                    events,
                    intents,
                )
                .await?;
                tracing::debug!(content_entry_id, "content entry questions generated");
                Ok(())
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
