use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBankRenamedV1 {
    pub content_bank_id: String,
    pub name: String,
    pub updated_at: i64,
}
