use crate::modules::content_entries::core::entry::{ContentEntry, ContentEntryStatus};
use crate::modules::content_entries::core::events::ContentEntryEvent;

pub fn evolve(state: Option<ContentEntry>, event: &ContentEntryEvent) -> Option<ContentEntry> {
    match (state, event) {
        (None, ContentEntryEvent::ContentEntryCreatedV1(e)) => Some(ContentEntry {
            id: e.content_entry_id.clone(),
            user_id: e.user_id.clone(),
            content_bank_id: e.content_bank_id.clone(),
            content_type: e.content_type,
            content: e.content.clone(),
            source_url: e.source_url.clone(),
            page_title: e.page_title.clone(),
            status: e.status,
            questions_generated: false,
            word_count: e.word_count,
            video_duration: e.video_duration,
            youtube_video_id: e.youtube_video_id.clone(),
            topic_ids: e.topic_ids.clone(),
            created_at: e.created_at,
            updated_at: e.created_at,
            version: 1,
        }),
        (Some(mut entry), ContentEntryEvent::ContentEntryUpdatedV1(e)) => {
            entry.content = e.content.clone();
            entry.page_title = e.page_title.clone();
            entry.word_count = e.word_count;
            entry.updated_at = e.updated_at;
            entry.version += 1;
            Some(entry)
        }
        (Some(mut entry), ContentEntryEvent::ContentEntryTopicsAddedV1(e)) => {
            for topic_id in &e.topic_ids {
                if !entry.topic_ids.contains(topic_id) {
                    entry.topic_ids.push(topic_id.clone());
                }
            }
            entry.status = ContentEntryStatus::Analyzed;
            entry.updated_at = e.updated_at;
            entry.version += 1;
            Some(entry)
        }
        (Some(mut entry), ContentEntryEvent::ContentEntryQuestionsGeneratedV1(e)) => {
            entry.questions_generated = true;
            entry.updated_at = e.updated_at;
            entry.version += 1;
            Some(entry)
        }
        (Some(_), ContentEntryEvent::ContentEntryDeletedV1(_)) => None,
        (state, _) => state,
    }
}
