use crate::modules::content_banks::adapters::outbound::repository::{
    ContentBankRepository, find_owned,
};
use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::adapters::outbound::state_store::commit;
use crate::modules::content_entries::core::decision::Decision;
use crate::modules::content_entries::core::entry::{ContentEntry, ContentType};
use crate::modules::content_entries::use_cases::create_content_entry::command::CreateContentEntry;
use crate::modules::content_entries::use_cases::create_content_entry::decide::decide_create;
use crate::modules::topics::adapters::outbound::repository::TopicRepository;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct CreateContentEntryHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    banks: Arc<dyn ContentBankRepository>,
    entries: Arc<dyn ContentEntryRepository>,
    topics: Arc<dyn TopicRepository>,
    outbox: Arc<TOutbox>,
}

impl<TOutbox> CreateContentEntryHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        banks: Arc<dyn ContentBankRepository>,
        entries: Arc<dyn ContentEntryRepository>,
        topics: Arc<dyn TopicRepository>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            banks,
            entries,
            topics,
            outbox,
        }
    }

    /// Returns the stored entry, which is an existing one when the same page or video was
    /// captured into the bank before.
    pub async fn handle(&self, command: CreateContentEntry) -> Result<ContentEntry, ApplicationError> {
        let bank = find_owned(&*self.banks, &command.user_id, &command.content_bank_id).await?;
        let same_source = match (&command.source_url, command.content_type) {
            (Some(url), ContentType::FullHtml | ContentType::VideoTranscript) => {
                self.entries
                    .find_by_source_url(&command.content_bank_id, command.content_type, url)
                    .await?
            }
            _ => None,
        };
        let stored = self.entries.get(&command.content_entry_id).await?;
        let existing_topics: Vec<String> = self
            .topics
            .list_by_user(&command.user_id)
            .await?
            .into_iter()
            .map(|topic| topic.name)
            .collect();

        let stream_entry_id = same_source
            .as_ref()
            .map_or_else(|| command.content_entry_id.clone(), |entry| entry.id.clone());
        match decide_create(
            bank.as_ref(),
            stored.as_ref(),
            same_source.as_ref(),
            &existing_topics,
            command,
        ) {
            Decision::Accepted { events, intents } => {
                let entry = commit(
                    &*self.entries,
                    &*self.outbox,
                    &stream_entry_id,
                    same_source,
                    events,
                    intents,
                )
                .await?
                .ok_or_else(|| {
                    ApplicationError::Unexpected(format!(
                        "content entry {stream_entry_id} missing after create"
                    ))
                })?;
                tracing::info!(
                    content_entry_id = %entry.id,
                    content_bank_id = %entry.content_bank_id,
                    content_type = entry.content_type.as_str(),
                    "content entry saved"
                );
                Ok(entry)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
