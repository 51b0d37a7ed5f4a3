use crate::modules::content_entries::core::entry::{
    ContentEntry, ContentEntryStatus, ContentType, count_words,
};
use crate::modules::content_entries::core::events::v1::content_entry_created::ContentEntryCreatedV1;
use crate::modules::content_entries::use_cases::create_content_entry::command::CreateContentEntry;

const CONTENT: &str = "Ownership moves values between bindings";
const SOURCE_URL: &str = "https://doc.rust-lang.org/book/ch04-01-what-is-ownership.html";
const PAGE_TITLE: &str = "What is Ownership?";

pub struct ContentEntryBuilder {
    inner: ContentEntry,
}

impl Default for ContentEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ContentEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: ContentEntry {
                id: "entry-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                content_bank_id: "bank-fixed-0001".to_string(),
                content_type: ContentType::SelectedText,
                content: CONTENT.to_string(),
                source_url: None,
                page_title: PAGE_TITLE.to_string(),
                status: ContentEntryStatus::Pending,
                questions_generated: false,
                word_count: count_words(ContentType::SelectedText, CONTENT),
                video_duration: None,
                youtube_video_id: None,
                topic_ids: Vec::new(),
                created_at: 1_700_000_000_000,
                updated_at: 1_700_000_000_000,
                version: 1,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn content_bank_id(mut self, v: impl Into<String>) -> Self {
        self.inner.content_bank_id = v.into();
        self
    }

    pub fn content_type(mut self, v: ContentType) -> Self {
        self.inner.content_type = v;
        self.inner.word_count = count_words(v, &self.inner.content);
        self
    }

    pub fn source_url(mut self, v: Option<&str>) -> Self {
        self.inner.source_url = v.map(str::to_string);
        self
    }

    pub fn status(mut self, v: ContentEntryStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn questions_generated(mut self, v: bool) -> Self {
        self.inner.questions_generated = v;
        self
    }

    pub fn topic_ids(mut self, v: Vec<String>) -> Self {
        self.inner.topic_ids = v;
        self
    }

    /// Also stamps `updated_at`.
    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self.inner.updated_at = v;
        self
    }

    pub fn build(self) -> ContentEntry {
        self.inner
    }
}

pub struct CreateContentEntryBuilder {
    inner: CreateContentEntry,
}

impl Default for CreateContentEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateContentEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateContentEntry {
                content_entry_id: "entry-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                content_bank_id: "bank-fixed-0001".to_string(),
                content_type: ContentType::SelectedText,
                content: CONTENT.to_string(),
                source_url: Some(SOURCE_URL.to_string()),
                page_title: PAGE_TITLE.to_string(),
                video_duration: None,
                youtube_video_id: None,
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn content_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.content_entry_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn content_bank_id(mut self, v: impl Into<String>) -> Self {
        self.inner.content_bank_id = v.into();
        self
    }

    pub fn content_type(mut self, v: ContentType) -> Self {
        self.inner.content_type = v;
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn source_url(mut self, v: Option<&str>) -> Self {
        self.inner.source_url = v.map(str::to_string);
        self
    }

    pub fn build(self) -> CreateContentEntry {
        self.inner
    }
}

/// Creation event of the default entry.
pub fn make_content_entry_created_v1_event() -> ContentEntryCreatedV1 {
    let command = CreateContentEntryBuilder::new().build();
    ContentEntryCreatedV1 {
        word_count: count_words(command.content_type, &command.content),
        content_entry_id: command.content_entry_id,
        user_id: command.user_id,
        content_bank_id: command.content_bank_id,
        content_type: command.content_type,
        content: command.content,
        source_url: command.source_url,
        page_title: command.page_title,
        video_duration: command.video_duration,
        youtube_video_id: command.youtube_video_id,
        status: ContentEntryStatus::Pending,
        topic_ids: Vec::new(),
        created_at: command.created_at,
    }
}
