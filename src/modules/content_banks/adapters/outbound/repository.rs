use crate::modules::content_banks::core::bank::ContentBank;
use async_trait::async_trait;

#[async_trait]
pub trait ContentBankRepository: Send + Sync {
    async fn get(&self, id: &str) -> anyhow::Result<Option<ContentBank>>;

    /// Exact match on the stored (trimmed) name.
    async fn find_by_name(&self, user_id: &str, name: &str) -> anyhow::Result<Option<ContentBank>>;

    /// Newest first. `name_filter` matches case-insensitively anywhere in the name.
    async fn list_by_user(
        &self,
        user_id: &str,
        name_filter: Option<&str>,
    ) -> anyhow::Result<Vec<ContentBank>>;

    async fn save(&self, bank: ContentBank) -> anyhow::Result<()>;

    /// Removes the bank and keeps `version` as the stream's last version.
    async fn delete(&self, id: &str, version: i64) -> anyhow::Result<()>;

    /// Last version written for the id, deleted banks included. Zero when never written.
    async fn stream_version(&self, id: &str) -> anyhow::Result<i64>;
}

/// Owned lookup: banks of other users read as missing.
pub async fn find_owned(
    repository: &dyn ContentBankRepository,
    user_id: &str,
    id: &str,
) -> anyhow::Result<Option<ContentBank>> {
    Ok(repository
        .get(id)
        .await?
        .filter(|bank| bank.user_id == user_id))
}
