use crate::modules::content_entries::core::decision::{DecideError, Decision};
use crate::modules::content_entries::core::entry::ContentEntry;
use crate::modules::content_entries::core::events::ContentEntryEvent;
use crate::modules::content_entries::core::events::v1::content_entry_questions_generated::ContentEntryQuestionsGeneratedV1;

pub fn decide_mark_questions_generated(current: Option<&ContentEntry>, updated_at: i64) -> Decision {
    match current {
        None => Decision::reject(DecideError::NotFound),
        Some(entry) if entry.questions_generated => Decision::unchanged(),
        Some(entry) => Decision::record(ContentEntryEvent::ContentEntryQuestionsGeneratedV1(
            ContentEntryQuestionsGeneratedV1 {
                content_entry_id: entry.id.clone(),
                updated_at,
            },
        )),
    }
}
