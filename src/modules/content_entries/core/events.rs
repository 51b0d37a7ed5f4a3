pub mod v1 {
    pub mod content_entry_created;
    pub mod content_entry_deleted;
    pub mod content_entry_questions_generated;
    pub mod content_entry_topics_added;
    pub mod content_entry_updated;
}

use v1::content_entry_created::ContentEntryCreatedV1;
use v1::content_entry_deleted::ContentEntryDeletedV1;
use v1::content_entry_questions_generated::ContentEntryQuestionsGeneratedV1;
use v1::content_entry_topics_added::ContentEntryTopicsAddedV1;
use v1::content_entry_updated::ContentEntryUpdatedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ContentEntryEvent {
    ContentEntryCreatedV1(ContentEntryCreatedV1),
    ContentEntryUpdatedV1(ContentEntryUpdatedV1),
    ContentEntryTopicsAddedV1(ContentEntryTopicsAddedV1),
    ContentEntryQuestionsGeneratedV1(ContentEntryQuestionsGeneratedV1),
    ContentEntryDeletedV1(ContentEntryDeletedV1),
}

impl ContentEntryEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ContentEntryEvent::ContentEntryCreatedV1(_) => "ContentEntryCreated",
            ContentEntryEvent::ContentEntryUpdatedV1(_) => "ContentEntryUpdated",
            ContentEntryEvent::ContentEntryTopicsAddedV1(_) => "ContentEntryTopicsAdded",
            ContentEntryEvent::ContentEntryQuestionsGeneratedV1(_) => {
                "ContentEntryQuestionsGenerated"
            }
            ContentEntryEvent::ContentEntryDeletedV1(_) => "ContentEntryDeleted",
        }
    }

    pub fn content_entry_id(&self) -> &str {
        match self {
            ContentEntryEvent::ContentEntryCreatedV1(e) => &e.content_entry_id,
            ContentEntryEvent::ContentEntryUpdatedV1(e) => &e.content_entry_id,
            ContentEntryEvent::ContentEntryTopicsAddedV1(e) => &e.content_entry_id,
            ContentEntryEvent::ContentEntryQuestionsGeneratedV1(e) => &e.content_entry_id,
            ContentEntryEvent::ContentEntryDeletedV1(e) => &e.content_entry_id,
        }
    }

    pub fn occurred_at(&self) -> i64 {
        match self {
            ContentEntryEvent::ContentEntryCreatedV1(e) => e.created_at,
            ContentEntryEvent::ContentEntryUpdatedV1(e) => e.updated_at,
            ContentEntryEvent::ContentEntryTopicsAddedV1(e) => e.updated_at,
            ContentEntryEvent::ContentEntryQuestionsGeneratedV1(e) => e.updated_at,
            ContentEntryEvent::ContentEntryDeletedV1(e) => e.deleted_at,
        }
    }
}
