use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBankDeletedV1 {
    pub content_bank_id: String,
    pub user_id: String,
    pub deleted_at: i64,
}
