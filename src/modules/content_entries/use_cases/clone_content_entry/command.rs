#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneContentEntry {
    pub source_content_entry_id: String,
    pub user_id: String,
    pub target_content_bank_id: String,
    pub new_content_entry_id: String,
    pub created_at: i64,
}
