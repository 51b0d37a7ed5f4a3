use crate::modules::content_entries::core::events::ContentEntryEvent;
use serde::{Deserialize, Serialize};

pub const GENERATE_ACTION: &str = "GENERATE";
pub const SAVE_ACTION: &str = "SAVE";

/// Message on `content-entry-events`. Outbound it asks the analyser for topics (`GENERATE`),
/// inbound it carries the analysed topics back (`SAVE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntryTopicsMessage {
    pub user_id: String,
    pub content_id: String,
    pub action: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub page_title: Option<String>,
    /// Comma separated names of the user's existing topics.
    #[serde(default)]
    pub existing_topics: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEntryIntent {
    PublishContentEntryEvent { event: ContentEntryEvent },
    RequestTopicGeneration { payload: ContentEntryTopicsMessage },
}
