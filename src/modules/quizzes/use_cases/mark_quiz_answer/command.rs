#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkQuizAnswer {
    pub quiz_id: String,
    pub user_id: String,
    /// Option picked for the current question.
    pub option_id: i64,
    pub marked_at: i64,
}

/// Answer feedback. Rejected answers come back with `success = false` and the reason.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MarkAnswerOutcome {
    pub message: String,
    pub success: bool,
    pub is_completed: bool,
    pub correct_option_id: Option<i64>,
}
