use crate::modules::content_banks::adapters::outbound::repository::ContentBankRepository;
use crate::modules::content_banks::adapters::outbound::state_store::commit;
use crate::modules::content_banks::core::bank::{ContentBank, normalize_bank_name};
use crate::modules::content_banks::core::decision::Decision;
use crate::modules::content_banks::use_cases::create_content_bank::command::CreateContentBank;
use crate::modules::content_banks::use_cases::create_content_bank::decide::decide_create;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct CreateContentBankHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    repository: Arc<dyn ContentBankRepository>,
    outbox: Arc<TOutbox>,
}

impl<TOutbox> CreateContentBankHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(repository: Arc<dyn ContentBankRepository>, outbox: Arc<TOutbox>) -> Self {
        Self { repository, outbox }
    }

    pub async fn handle(&self, command: CreateContentBank) -> Result<ContentBank, ApplicationError> {
        let existing = self.repository.get(&command.content_bank_id).await?;
        let name_holder = match normalize_bank_name(&command.name) {
            Some(name) => self.repository.find_by_name(&command.user_id, &name).await?,
            None => None,
        };
        let content_bank_id = command.content_bank_id.clone();
        match decide_create(existing.as_ref(), name_holder.as_ref(), command) {
            Decision::Accepted { events } => {
                let bank = commit(&*self.repository, &*self.outbox, existing, events)
                    .await?
                    .ok_or_else(|| {
                        ApplicationError::Unexpected(format!(
                            "content bank {content_bank_id} missing after create"
                        ))
                    })?;
                tracing::info!(content_bank_id = %bank.id, user_id = %bank.user_id, "content bank saved");
                Ok(bank)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
