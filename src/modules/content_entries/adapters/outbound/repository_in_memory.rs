use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::core::entry::{ContentEntry, ContentType};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryContentEntryRepository {
    entries: RwLock<HashMap<String, ContentEntry>>,
    versions: RwLock<HashMap<String, i64>>,
    is_offline: bool,
}

impl InMemoryContentEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Content entry repository offline");
        }
        Ok(())
    }
}

#[async_trait]
impl ContentEntryRepository for InMemoryContentEntryRepository {
    async fn get(&self, id: &str) -> anyhow::Result<Option<ContentEntry>> {
        self.ensure_online()?;
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn find_by_source_url(
        &self,
        content_bank_id: &str,
        content_type: ContentType,
        source_url: &str,
    ) -> anyhow::Result<Option<ContentEntry>> {
        self.ensure_online()?;
        Ok(self
            .entries
            .read()
            .await
            .values()
            .find(|entry| {
                entry.content_bank_id == content_bank_id
                    && entry.content_type == content_type
                    && entry.source_url.as_deref() == Some(source_url)
            })
            .cloned())
    }

    async fn list_by_bank(&self, content_bank_id: &str) -> anyhow::Result<Vec<ContentEntry>> {
        self.ensure_online()?;
        let mut entries: Vec<ContentEntry> = self
            .entries
            .read()
            .await
            .values()
            .filter(|entry| entry.content_bank_id == content_bank_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(entries)
    }

    async fn count_by_bank(&self, content_bank_id: &str) -> anyhow::Result<usize> {
        self.ensure_online()?;
        Ok(self
            .entries
            .read()
            .await
            .values()
            .filter(|entry| entry.content_bank_id == content_bank_id)
            .count())
    }

    async fn save(&self, entry: ContentEntry) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut versions = self.versions.write().await;
        let last = versions.entry(entry.id.clone()).or_insert(0);
        *last = (*last).max(entry.version);
        self.entries.write().await.insert(entry.id.clone(), entry);
        Ok(())
    }

    async fn delete(&self, id: &str, version: i64) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.versions.write().await.insert(id.to_string(), version);
        self.entries.write().await.remove(id);
        Ok(())
    }

    async fn stream_version(&self, id: &str) -> anyhow::Result<i64> {
        self.ensure_online()?;
        Ok(self.versions.read().await.get(id).copied().unwrap_or(0))
    }

    async fn delete_by_bank(&self, content_bank_id: &str) -> anyhow::Result<Vec<String>> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        let ids: Vec<String> = guard
            .values()
            .filter(|entry| entry.content_bank_id == content_bank_id)
            .map(|entry| entry.id.clone())
            .collect();
        for id in &ids {
            guard.remove(id);
        }
        Ok(ids)
    }
}
