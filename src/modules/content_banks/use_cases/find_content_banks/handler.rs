use crate::modules::content_banks::adapters::outbound::repository::{
    ContentBankRepository, find_owned,
};
use crate::modules::content_banks::core::bank::ContentBank;
use crate::modules::content_banks::core::decision::DecideError;
use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::shared::core::errors::ApplicationError;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBankView {
    pub id: String,
    pub name: String,
    pub content_entries_count: usize,
    pub created_at: i64,
    pub updated_at: i64,
}

pub struct FindContentBanksHandler {
    banks: Arc<dyn ContentBankRepository>,
    entries: Arc<dyn ContentEntryRepository>,
}

impl FindContentBanksHandler {
    pub fn new(
        banks: Arc<dyn ContentBankRepository>,
        entries: Arc<dyn ContentEntryRepository>,
    ) -> Self {
        Self { banks, entries }
    }

    pub async fn find_one(
        &self,
        user_id: &str,
        content_bank_id: &str,
    ) -> Result<ContentBankView, ApplicationError> {
        let bank = find_owned(&*self.banks, user_id, content_bank_id)
            .await?
            .ok_or_else(|| ApplicationError::from(DecideError::NotFound))?;
        self.view(bank).await
    }

    /// Newest first, optionally narrowed by a case-insensitive name fragment.
    pub async fn list_by_user(
        &self,
        user_id: &str,
        name_filter: Option<&str>,
    ) -> Result<Vec<ContentBankView>, ApplicationError> {
        let filter = name_filter.map(str::trim).filter(|fragment| !fragment.is_empty());
        let banks = self.banks.list_by_user(user_id, filter).await?;
        let mut views = Vec::with_capacity(banks.len());
        for bank in banks {
            views.push(self.view(bank).await?);
        }
        Ok(views)
    }

    async fn view(&self, bank: ContentBank) -> Result<ContentBankView, ApplicationError> {
        let content_entries_count = self.entries.count_by_bank(&bank.id).await?;
        Ok(ContentBankView {
            id: bank.id,
            name: bank.name,
            content_entries_count,
            created_at: bank.created_at,
            updated_at: bank.updated_at,
        })
    }
}
