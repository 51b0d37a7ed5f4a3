use crate::modules::content_entries::core::entry::ContentType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContentEntry {
    pub content_entry_id: String,
    pub user_id: String,
    pub content_bank_id: String,
    pub content_type: ContentType,
    pub content: String,
    pub source_url: Option<String>,
    pub page_title: String,
    pub video_duration: Option<i32>,
    pub youtube_video_id: Option<String>,
    pub created_at: i64,
}
