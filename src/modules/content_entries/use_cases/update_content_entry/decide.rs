use crate::modules::content_entries::core::decision::{DecideError, Decision};
use crate::modules::content_entries::core::entry::{ContentEntry, count_words, normalize_content};
use crate::modules::content_entries::core::events::ContentEntryEvent;
use crate::modules::content_entries::core::events::v1::content_entry_updated::ContentEntryUpdatedV1;
use crate::modules::content_entries::use_cases::update_content_entry::command::UpdateContentEntry;

pub fn decide_update(current: Option<&ContentEntry>, command: UpdateContentEntry) -> Decision {
    let Some(entry) = current.filter(|entry| entry.user_id == command.user_id) else {
        return Decision::reject(DecideError::NotFound);
    };
    let content = normalize_content(entry.content_type, &command.content);
    if content == entry.content && command.page_title == entry.page_title {
        return Decision::unchanged();
    }
    Decision::record(ContentEntryEvent::ContentEntryUpdatedV1(ContentEntryUpdatedV1 {
        content_entry_id: entry.id.clone(),
        word_count: count_words(entry.content_type, &content),
        content,
        page_title: command.page_title,
        updated_at: command.updated_at,
    }))
}
