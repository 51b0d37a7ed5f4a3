use crate::modules::content_banks::core::bank::ContentBank;
use crate::modules::content_entries::core::decision::{DecideError, Decision};
use crate::modules::content_entries::core::entry::{ContentEntry, ContentEntryStatus};
use crate::modules::content_entries::core::events::ContentEntryEvent;
use crate::modules::content_entries::core::events::v1::content_entry_created::ContentEntryCreatedV1;
use crate::modules::content_entries::use_cases::clone_content_entry::command::CloneContentEntry;

/// Creation event of a copy of `source` in another bank. Topic links and analysis status carry
/// over, generated questions do not.
pub fn cloned_entry_created(
    source: &ContentEntry,
    new_content_entry_id: &str,
    target_content_bank_id: &str,
    created_at: i64,
) -> ContentEntryEvent {
    ContentEntryEvent::ContentEntryCreatedV1(ContentEntryCreatedV1 {
        content_entry_id: new_content_entry_id.to_string(),
        user_id: source.user_id.clone(),
        content_bank_id: target_content_bank_id.to_string(),
        content_type: source.content_type,
        content: source.content.clone(),
        source_url: source.source_url.clone(),
        page_title: source.page_title.clone(),
        word_count: source.word_count,
        video_duration: source.video_duration,
        youtube_video_id: source.youtube_video_id.clone(),
        status: source.status,
        topic_ids: source.topic_ids.clone(),
        created_at,
    })
}

pub fn decide_clone(
    source: Option<&ContentEntry>,
    target_bank: Option<&ContentBank>,
    command: CloneContentEntry,
) -> Decision {
    let Some(source) = source.filter(|entry| entry.user_id == command.user_id) else {
        return Decision::reject(DecideError::NotFound);
    };
    if !target_bank.is_some_and(|bank| bank.user_id == command.user_id) {
        return Decision::reject(DecideError::BankNotFound);
    }
    if source.status == ContentEntryStatus::Pending {
        return Decision::reject(DecideError::StillPending);
    }
    Decision::record(cloned_entry_created(
        source,
        &command.new_content_entry_id,
        &command.target_content_bank_id,
        command.created_at,
    ))
}
