use crate::modules::content_banks::adapters::outbound::repository::ContentBankRepository;
use crate::modules::content_banks::core::bank::ContentBank;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryContentBankRepository {
    banks: RwLock<HashMap<String, ContentBank>>,
    versions: RwLock<HashMap<String, i64>>,
    is_offline: bool,
}

impl InMemoryContentBankRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Content bank repository offline");
        }
        Ok(())
    }
}

#[async_trait]
impl ContentBankRepository for InMemoryContentBankRepository {
    async fn get(&self, id: &str) -> anyhow::Result<Option<ContentBank>> {
        self.ensure_online()?;
        Ok(self.banks.read().await.get(id).cloned())
    }

    async fn find_by_name(&self, user_id: &str, name: &str) -> anyhow::Result<Option<ContentBank>> {
        self.ensure_online()?;
        Ok(self
            .banks
            .read()
            .await
            .values()
            .find(|bank| bank.user_id == user_id && bank.name == name)
            .cloned())
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        name_filter: Option<&str>,
    ) -> anyhow::Result<Vec<ContentBank>> {
        self.ensure_online()?;
        let needle = name_filter.map(str::to_lowercase);
        let mut banks: Vec<ContentBank> = self
            .banks
            .read()
            .await
            .values()
            .filter(|bank| bank.user_id == user_id)
            .filter(|bank| {
                needle
                    .as_deref()
                    .is_none_or(|needle| bank.name.to_lowercase().contains(needle))
            })
            .cloned()
            .collect();
        banks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(banks)
    }

    async fn save(&self, bank: ContentBank) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut versions = self.versions.write().await;
        let last = versions.entry(bank.id.clone()).or_insert(0);
        *last = (*last).max(bank.version);
        self.banks.write().await.insert(bank.id.clone(), bank);
        Ok(())
    }

    async fn delete(&self, id: &str, version: i64) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.versions.write().await.insert(id.to_string(), version);
        self.banks.write().await.remove(id);
        Ok(())
    }

    async fn stream_version(&self, id: &str) -> anyhow::Result<i64> {
        self.ensure_online()?;
        Ok(self.versions.read().await.get(id).copied().unwrap_or(0))
    }
}
