#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateContentEntry {
    pub content_entry_id: String,
    pub user_id: String,
    pub content: String,
    pub page_title: String,
    pub updated_at: i64,
}
