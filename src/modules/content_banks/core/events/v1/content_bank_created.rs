use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBankCreatedV1 {
    pub content_bank_id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: i64,
}
