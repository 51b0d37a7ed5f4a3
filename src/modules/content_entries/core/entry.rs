use serde::{Deserialize, Serialize};

pub const PREVIEW_LENGTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    SelectedText,
    FullHtml,
    VideoTranscript,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::SelectedText => "selected_text",
            ContentType::FullHtml => "full_html",
            ContentType::VideoTranscript => "video_transcript",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentEntryStatus {
    Pending,
    Analyzed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub id: String,
    pub user_id: String,
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
    pub topic_ids: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub version: i64,
}

/// Whitespace separated words, only counted for text and page captures.
pub fn count_words(content_type: ContentType, content: &str) -> Option<i32> {
    match content_type {
        ContentType::SelectedText | ContentType::FullHtml if !content.trim().is_empty() => {
            Some(content.split_whitespace().count() as i32)
        }
        _ => None,
    }
}

/// Full HTML captures are stored trimmed, other content as sent.
pub fn normalize_content(content_type: ContentType, content: &str) -> String {
    match content_type {
        ContentType::FullHtml => content.trim().to_string(),
        _ => content.to_string(),
    }
}

pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
