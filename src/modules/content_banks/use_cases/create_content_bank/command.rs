#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContentBank {
    pub content_bank_id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: i64,
}
