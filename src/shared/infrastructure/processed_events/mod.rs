// Idempotency ledger for inbound integration events. A consumer checks it before acting and
// records the event id once its work is stored.

use async_trait::async_trait;

#[async_trait]
pub trait ProcessedEventRepository: Send + Sync {
    async fn is_processed(&self, event_id: &str) -> anyhow::Result<bool>;

    async fn mark_processed(
        &self,
        event_id: &str,
        user_id: &str,
        event_type: &str,
    ) -> anyhow::Result<()>;
}

pub mod in_memory;
