use crate::modules::content_banks::adapters::outbound::repository::{
    ContentBankRepository, find_owned,
};
use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::adapters::outbound::state_store::commit;
use crate::modules::content_entries::core::decision::Decision;
use crate::modules::content_entries::core::entry::ContentEntry;
use crate::modules::content_entries::use_cases::clone_content_entry::command::CloneContentEntry;
use crate::modules::content_entries::use_cases::clone_content_entry::decide::decide_clone;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct CloneContentEntryHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    banks: Arc<dyn ContentBankRepository>,
    entries: Arc<dyn ContentEntryRepository>,
    outbox: Arc<TOutbox>,
}

impl<TOutbox> CloneContentEntryHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        banks: Arc<dyn ContentBankRepository>,
        entries: Arc<dyn ContentEntryRepository>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            banks,
            entries,
            outbox,
        }
    }

    pub async fn handle(&self, command: CloneContentEntry) -> Result<ContentEntry, ApplicationError> {
        let source = self.entries.get(&command.source_content_entry_id).await?;
        let target_bank =
            find_owned(&*self.banks, &command.user_id, &command.target_content_bank_id).await?;
        let new_id = command.new_content_entry_id.clone();
        match decide_clone(source.as_ref(), target_bank.as_ref(), command) {
            Decision::Accepted { events, intents } => {
                let clone = commit(&*self.entries, &*self.outbox, &new_id, None, events, intents)
                    .await?
                    .ok_or_else(|| {
                        ApplicationError::Unexpected(format!("content entry {new_id} missing after clone"))
                    })?;
                tracing::info!(
                    content_entry_id = %clone.id,
                    content_bank_id = %clone.content_bank_id,
                    "content entry cloned"
                );
                Ok(clone)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
