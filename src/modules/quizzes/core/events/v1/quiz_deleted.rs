#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct QuizDeletedV1 {
    pub quiz_id: String,
    pub deleted_at: i64,
}
