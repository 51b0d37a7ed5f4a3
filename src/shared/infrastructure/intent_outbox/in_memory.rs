use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

type RowKey = (String, i64, String);

/// Holds undispatched rows only. Keys of dispatched rows stay in `seen` so a replayed
/// enqueue is still refused.
#[derive(Default)]
pub struct InMemoryDomainOutbox {
    pub rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<RowKey>>,
    is_offline: bool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), OutboxError> {
        if self.is_offline {
            return Err(OutboxError::Transient("Outbox offline".into()));
        }
        Ok(())
    }
}

fn key_of(row: &OutboxRow) -> RowKey {
    (
        row.stream_id.clone(),
        row.stream_version,
        row.event_type.clone(),
    )
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        self.ensure_online()?;
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key_of(&row)) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                    event_type: row.event_type,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }

    async fn pending(&self, limit: usize) -> Result<Vec<OutboxRow>, OutboxError> {
        self.ensure_online()?;
        Ok(self.rows.lock().await.iter().take(limit).cloned().collect())
    }

    async fn mark_dispatched(
        &self,
        stream_id: &str,
        stream_version: i64,
        event_type: &str,
    ) -> Result<(), OutboxError> {
        self.ensure_online()?;
        let mut rows = self.rows.lock().await;
        let Some(index) = rows.iter().position(|row| {
            row.stream_id == stream_id
                && row.stream_version == stream_version
                && row.event_type == event_type
        }) else {
            return Err(OutboxError::Backend(format!(
                "no pending outbox row {event_type} for stream {stream_id} v{stream_version}"
            )));
        };
        rows.remove(index);
        Ok(())
    }
}
