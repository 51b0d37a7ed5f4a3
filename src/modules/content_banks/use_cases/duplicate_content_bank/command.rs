#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateContentBank {
    pub source_content_bank_id: String,
    pub new_content_bank_id: String,
    pub user_id: String,
    /// Falls back to "Copy of {source name}" when absent or blank.
    pub name: Option<String>,
    pub created_at: i64,
}
