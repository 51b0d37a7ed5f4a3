use serde::{Deserialize, Serialize};

/// Free text a user attaches to every question generation request. One per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub user_id: String,
    pub instruction: String,
    pub updated_at: i64,
}
