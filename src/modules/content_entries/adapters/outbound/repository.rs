use crate::modules::content_entries::core::entry::{ContentEntry, ContentType};
use async_trait::async_trait;

#[async_trait]
pub trait ContentEntryRepository: Send + Sync {
    async fn get(&self, id: &str) -> anyhow::Result<Option<ContentEntry>>;

    async fn find_by_source_url(
        &self,
        content_bank_id: &str,
        content_type: ContentType,
        source_url: &str,
    ) -> anyhow::Result<Option<ContentEntry>>;

    /// Oldest first.
    async fn list_by_bank(&self, content_bank_id: &str) -> anyhow::Result<Vec<ContentEntry>>;

    async fn count_by_bank(&self, content_bank_id: &str) -> anyhow::Result<usize>;

    async fn save(&self, entry: ContentEntry) -> anyhow::Result<()>;

    /// Removes the entry and keeps `version` as the stream's last version.
    async fn delete(&self, id: &str, version: i64) -> anyhow::Result<()>;

    /// Last version written for the id, deleted entries included. Zero when never written.
    async fn stream_version(&self, id: &str) -> anyhow::Result<i64>;

    /// Removes every entry of the bank and returns their ids.
    async fn delete_by_bank(&self, content_bank_id: &str) -> anyhow::Result<Vec<String>>;
}

/// Owned lookup: entries of other users read as missing.
pub async fn find_owned(
    repository: &dyn ContentEntryRepository,
    user_id: &str,
    id: &str,
) -> anyhow::Result<Option<ContentEntry>> {
    Ok(repository
        .get(id)
        .await?
        .filter(|entry| entry.user_id == user_id))
}
