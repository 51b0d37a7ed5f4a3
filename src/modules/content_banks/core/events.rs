pub mod v1 {
    pub mod content_bank_created;
    pub mod content_bank_deleted;
    pub mod content_bank_renamed;
}

use v1::content_bank_created::ContentBankCreatedV1;
use v1::content_bank_deleted::ContentBankDeletedV1;
use v1::content_bank_renamed::ContentBankRenamedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ContentBankEvent {
    ContentBankCreatedV1(ContentBankCreatedV1),
    ContentBankRenamedV1(ContentBankRenamedV1),
    ContentBankDeletedV1(ContentBankDeletedV1),
}

impl ContentBankEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ContentBankEvent::ContentBankCreatedV1(_) => "ContentBankCreated",
            ContentBankEvent::ContentBankRenamedV1(_) => "ContentBankRenamed",
            ContentBankEvent::ContentBankDeletedV1(_) => "ContentBankDeleted",
        }
    }

    pub fn content_bank_id(&self) -> &str {
        match self {
            ContentBankEvent::ContentBankCreatedV1(e) => &e.content_bank_id,
            ContentBankEvent::ContentBankRenamedV1(e) => &e.content_bank_id,
            ContentBankEvent::ContentBankDeletedV1(e) => &e.content_bank_id,
        }
    }

    pub fn occurred_at(&self) -> i64 {
        match self {
            ContentBankEvent::ContentBankCreatedV1(e) => e.created_at,
            ContentBankEvent::ContentBankRenamedV1(e) => e.updated_at,
            ContentBankEvent::ContentBankDeletedV1(e) => e.deleted_at,
        }
    }
}
