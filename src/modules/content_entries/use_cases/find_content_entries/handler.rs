use crate::modules::content_banks::adapters::outbound::repository::{
    ContentBankRepository, find_owned as find_owned_bank,
};
use crate::modules::content_entries::adapters::outbound::repository::{
    ContentEntryRepository, find_owned,
};
use crate::modules::content_entries::core::decision::DecideError;
use crate::modules::content_entries::use_cases::find_content_entries::view::ContentEntryView;
use crate::modules::topics::adapters::outbound::repository::TopicRepository;
use crate::shared::core::errors::ApplicationError;
use std::collections::HashMap;
use std::sync::Arc;

pub struct FindContentEntriesHandler {
    banks: Arc<dyn ContentBankRepository>,
    entries: Arc<dyn ContentEntryRepository>,
    topics: Arc<dyn TopicRepository>,
}

impl FindContentEntriesHandler {
    pub fn new(
        banks: Arc<dyn ContentBankRepository>,
        entries: Arc<dyn ContentEntryRepository>,
        topics: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            banks,
            entries,
            topics,
        }
    }

    pub async fn find_one(
        &self,
        user_id: &str,
        content_entry_id: &str,
    ) -> Result<ContentEntryView, ApplicationError> {
        let entry = find_owned(&*self.entries, user_id, content_entry_id)
            .await?
            .ok_or_else(|| ApplicationError::from(DecideError::NotFound))?;
        let topics = self
            .topics
            .find_by_ids(user_id, &entry.topic_ids)
            .await?
            .into_iter()
            .map(|topic| topic.name)
            .collect();
        Ok(ContentEntryView::full(entry, topics))
    }

    /// Entries of an owned bank, oldest first.
    pub async fn list_by_bank(
        &self,
        user_id: &str,
        content_bank_id: &str,
    ) -> Result<Vec<ContentEntryView>, ApplicationError> {
        if find_owned_bank(&*self.banks, user_id, content_bank_id)
            .await?
            .is_none()
        {
            return Err(DecideError::BankNotFound.into());
        }
        let entries = self.entries.list_by_bank(content_bank_id).await?;
        let mut topic_ids: Vec<String> = entries
            .iter()
            .flat_map(|entry| entry.topic_ids.iter().cloned())
            .collect();
        topic_ids.sort();
        topic_ids.dedup();
        let names: HashMap<String, String> = self
            .topics
            .find_by_ids(user_id, &topic_ids)
            .await?
            .into_iter()
            .map(|topic| (topic.id, topic.name))
            .collect();

        Ok(entries
            .into_iter()
            .map(|entry| {
                let topics = entry
                    .topic_ids
                    .iter()
                    .filter_map(|id| names.get(id).cloned())
                    .collect();
                ContentEntryView::summary(entry, topics)
            })
            .collect())
    }
}
