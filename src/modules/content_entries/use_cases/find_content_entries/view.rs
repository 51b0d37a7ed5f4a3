use crate::modules::content_entries::core::entry::{
    ContentEntry, ContentEntryStatus, ContentType, preview,
};
use serde::Serialize;

/// Entry as returned by queries, with topic names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentEntryView {
    pub id: String,
    pub content_bank_id: String,
    pub content_type: ContentType,
    pub content: String,
    pub source_url: Option<String>,
    pub page_title: String,
    pub status: ContentEntryStatus,
    pub questions_generated: bool,
    pub word_count: Option<i32>,
    pub video_duration: Option<i32>,
    pub youtube_video_id: Option<String>,
    pub topics: Vec<String>,
    pub created_at: i64,
}

impl ContentEntryView {
    pub fn full(entry: ContentEntry, topics: Vec<String>) -> Self {
        Self {
            id: entry.id,
            content_bank_id: entry.content_bank_id,
            content_type: entry.content_type,
            content: entry.content,
            source_url: entry.source_url,
            page_title: entry.page_title,
            status: entry.status,
            questions_generated: entry.questions_generated,
            word_count: entry.word_count,
            video_duration: entry.video_duration,
            youtube_video_id: entry.youtube_video_id,
            topics,
            created_at: entry.created_at,
        }
    }

    /// Listing shape: content cut to a preview.
    pub fn summary(entry: ContentEntry, topics: Vec<String>) -> Self {
        let mut view = Self::full(entry, topics);
        view.content = preview(&view.content);
        view
    }
}
