use crate::modules::content_entries::core::decision::{DecideError, Decision};
use crate::modules::content_entries::core::entry::ContentEntry;
use crate::modules::content_entries::core::events::ContentEntryEvent;
use crate::modules::content_entries::core::events::v1::content_entry_topics_added::ContentEntryTopicsAddedV1;
use crate::modules::topics::core::topic::Topic;

/// Links the analysed topics to an entry that has none yet.
pub fn decide_apply_topics(
    current: Option<&ContentEntry>,
    topics: &[Topic],
    updated_at: i64,
) -> Decision {
    let Some(entry) = current else {
        return Decision::reject(DecideError::NotFound);
    };
    if !entry.topic_ids.is_empty() {
        return Decision::unchanged();
    }
    let mut linked: Vec<&Topic> = Vec::with_capacity(topics.len());
    for topic in topics {
        if !linked.iter().any(|seen| seen.id == topic.id) {
            linked.push(topic);
        }
    }
    Decision::record(ContentEntryEvent::ContentEntryTopicsAddedV1(
        ContentEntryTopicsAddedV1 {
            content_entry_id: entry.id.clone(),
            topic_ids: linked.iter().map(|topic| topic.id.clone()).collect(),
            topics: linked.iter().map(|topic| topic.name.clone()).collect(),
            updated_at,
        },
    ))
}
