use crate::modules::content_entries::core::intents::ContentEntryIntent;
use crate::shared::core::primitives::{now_millis, stream_id};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

pub const CONTENT_ENTRY_EVENTS_TOPIC: &str = "content-entry.events";
pub const TOPIC_GENERATION_TOPIC: &str = "content-entry-events";
pub const TOPIC_GENERATION_REQUESTED: &str = "TopicGenerationRequested";

pub fn content_entry_stream_id(content_entry_id: &str) -> String {
    stream_id("ContentEntry", content_entry_id)
}

/// Translate entry intents into outbox rows. Event rows are versioned one after another from
/// `base_version`, requests share the version reached after the last event.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    content_entry_id: &str,
    base_version: i64,
    intents: Vec<ContentEntryIntent>,
) -> Result<(), OutboxError> {
    let stream_id = content_entry_stream_id(content_entry_id);
    let mut version = base_version;
    for intent in intents {
        let row = match intent {
            ContentEntryIntent::PublishContentEntryEvent { event } => {
                version += 1;
                OutboxRow {
                    topic: CONTENT_ENTRY_EVENTS_TOPIC.to_string(),
                    key: event.content_entry_id().to_string(),
                    event_type: event.event_type().to_string(),
                    event_version: 1,
                    stream_id: stream_id.clone(),
                    stream_version: version,
                    occurred_at: event.occurred_at(),
                    payload: serde_json::to_value(&event)
                        .map_err(|e| OutboxError::Validation(e.to_string()))?,
                }
            }
            ContentEntryIntent::RequestTopicGeneration { payload } => OutboxRow {
                topic: TOPIC_GENERATION_TOPIC.to_string(),
                key: format!("content-entry-{}", payload.content_id),
                event_type: TOPIC_GENERATION_REQUESTED.to_string(),
                event_version: 1,
                stream_id: stream_id.clone(),
                stream_version: version,
                occurred_at: now_millis(),
                payload: serde_json::to_value(&payload)
                    .map_err(|e| OutboxError::Validation(e.to_string()))?,
            },
        };
        outbox.enqueue(row).await?;
    }
    Ok(())
}
