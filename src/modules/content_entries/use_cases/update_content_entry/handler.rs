use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::adapters::outbound::state_store::commit;
use crate::modules::content_entries::core::decision::{DecideError, Decision};
use crate::modules::content_entries::core::entry::ContentEntry;
use crate::modules::content_entries::use_cases::update_content_entry::command::UpdateContentEntry;
use crate::modules::content_entries::use_cases::update_content_entry::decide::decide_update;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct UpdateContentEntryHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    entries: Arc<dyn ContentEntryRepository>,
    outbox: Arc<TOutbox>,
}

impl<TOutbox> UpdateContentEntryHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(entries: Arc<dyn ContentEntryRepository>, outbox: Arc<TOutbox>) -> Self {
        Self { entries, outbox }
    }

    pub async fn handle(&self, command: UpdateContentEntry) -> Result<ContentEntry, ApplicationError> {
        let current = self.entries.get(&command.content_entry_id).await?;
        let content_entry_id = command.content_entry_id.clone();
        match decide_update(current.as_ref(), command) {
            Decision::Accepted { events, intents } => commit(
                &*self.entries,
                &*self.outbox,
                &content_entry_id,
                current,
                events,
                intents,
            )
            .await?
            .ok_or_else(|| DecideError::NotFound.into()),
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
