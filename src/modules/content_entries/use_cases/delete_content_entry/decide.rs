use crate::modules::content_entries::core::decision::{DecideError, Decision};
use crate::modules::content_entries::core::entry::ContentEntry;
use crate::modules::content_entries::core::events::ContentEntryEvent;
use crate::modules::content_entries::core::events::v1::content_entry_deleted::ContentEntryDeletedV1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContentEntry {
    pub content_entry_id: String,
    pub user_id: String,
    pub deleted_at: i64,
}

pub fn decide_delete(current: Option<&ContentEntry>, command: DeleteContentEntry) -> Decision {
    match current.filter(|entry| entry.user_id == command.user_id) {
        Some(entry) => Decision::record(ContentEntryEvent::ContentEntryDeletedV1(
            ContentEntryDeletedV1 {
                content_entry_id: entry.id.clone(),
                content_bank_id: entry.content_bank_id.clone(),
                deleted_at: command.deleted_at,
            },
        )),
        None => Decision::reject(DecideError::NotFound),
    }
}
