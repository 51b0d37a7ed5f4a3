use crate::modules::content_banks::adapters::outbound::repository::ContentBankRepository;
use crate::modules::content_banks::adapters::outbound::state_store::commit;
use crate::modules::content_banks::core::decision::Decision;
use crate::modules::content_banks::use_cases::delete_content_bank::decide::{
    DeleteContentBank, decide_delete,
};
use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::questions::adapters::outbound::repository::QuestionRepository;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

/// Removes an owned bank together with its entries and their questions.
pub struct DeleteContentBankHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    banks: Arc<dyn ContentBankRepository>,
    entries: Arc<dyn ContentEntryRepository>,
    questions: Arc<dyn QuestionRepository>,
    outbox: Arc<TOutbox>,
}

impl<TOutbox> DeleteContentBankHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        banks: Arc<dyn ContentBankRepository>,
        entries: Arc<dyn ContentEntryRepository>,
        questions: Arc<dyn QuestionRepository>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            banks,
            entries,
            questions,
            outbox,
        }
    }

    pub async fn handle(&self, command: DeleteContentBank) -> Result<(), ApplicationError> {
        let current = self.banks.get(&command.content_bank_id).await?;
        let content_bank_id = command.content_bank_id.clone();
        match decide_delete(current.as_ref(), command) {
            Decision::Accepted { events } => {
                commit(&*self.banks, &*self.outbox, current, events).await?;
                let removed = self.entries.delete_by_bank(&content_bank_id).await?;
                for content_entry_id in &removed {
                    self.questions
                        .delete_by_content_entry_id(content_entry_id)
                        .await?;
                }
                tracing::info!(
                    content_bank_id = %content_bank_id,
                    entries = removed.len(),
                    "content bank deleted"
                );
                Ok(())
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
