use crate::modules::content_banks::core::events::ContentBankEvent;
use crate::shared::core::primitives::stream_id;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

pub const CONTENT_BANK_EVENTS_TOPIC: &str = "content-bank.events";

pub fn content_bank_stream_id(content_bank_id: &str) -> String {
    stream_id("ContentBank", content_bank_id)
}

/// Enqueues one row per event. `base_version` is the bank version before the first event.
pub async fn publish_events(
    outbox: &impl DomainOutbox,
    base_version: i64,
    events: &[ContentBankEvent],
) -> Result<(), OutboxError> {
    for (offset, event) in events.iter().enumerate() {
        outbox
            .enqueue(OutboxRow {
                topic: CONTENT_BANK_EVENTS_TOPIC.to_string(),
                key: event.content_bank_id().to_string(),
                event_type: event.event_type().to_string(),
                event_version: 1,
                stream_id: content_bank_stream_id(event.content_bank_id()),
                stream_version: base_version + offset as i64 + 1,
                occurred_at: event.occurred_at(),
                payload: serde_json::to_value(event)
                    .map_err(|e| OutboxError::Validation(e.to_string()))?,
            })
            .await?;
    }
    Ok(())
}
