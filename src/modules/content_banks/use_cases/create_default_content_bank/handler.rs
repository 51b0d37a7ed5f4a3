use crate::modules::content_banks::core::bank::ContentBank;
use crate::modules::content_banks::core::decision::DecideError;
use crate::modules::content_banks::use_cases::create_content_bank::command::CreateContentBank;
use crate::modules::content_banks::use_cases::create_content_bank::handler::CreateContentBankHandler;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::new_id;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use crate::shared::infrastructure::processed_events::ProcessedEventRepository;
use std::sync::Arc;

pub const DEFAULT_BANK_NAME: &str = "Default";
pub const USER_VERIFIED_EVENT: &str = "auth.user.verified";

#[derive(Debug, Clone, PartialEq)]
pub struct UserVerified {
    pub event_id: String,
    pub user_id: String,
    pub verified_at: i64,
}

/// Gives every newly verified user a "Default" bank, once per event id.
pub struct CreateDefaultContentBankHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    create: CreateContentBankHandler<TOutbox>,
    processed: Arc<dyn ProcessedEventRepository>,
}

impl<TOutbox> CreateDefaultContentBankHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        create: CreateContentBankHandler<TOutbox>,
        processed: Arc<dyn ProcessedEventRepository>,
    ) -> Self {
        Self { create, processed }
    }

    /// Returns the created bank, or `None` when the event was seen before or the user
    /// already has a bank with the default name.
    pub async fn handle(&self, event: UserVerified) -> Result<Option<ContentBank>, ApplicationError> {
        if self.processed.is_processed(&event.event_id).await? {
            tracing::info!(event_id = %event.event_id, "user verified event already processed");
            return Ok(None);
        }

        let created = self
            .create
            .handle(CreateContentBank {
                content_bank_id: new_id(),
                user_id: event.user_id.clone(),
                name: DEFAULT_BANK_NAME.to_string(),
                created_at: event.verified_at,
            })
            .await;
        let bank = match created {
            Ok(bank) => Some(bank),
            Err(ApplicationError::Conflict(reason))
                if reason == DecideError::NameTaken.to_string() =>
            {
                tracing::warn!(user_id = %event.user_id, "default content bank already exists");
                None
            }
            Err(error) => return Err(error),
        };

        self.processed
            .mark_processed(&event.event_id, &event.user_id, USER_VERIFIED_EVENT)
            .await?;
        Ok(bank)
    }
}
