use serde::{Deserialize, Serialize};

/// An IN_PROGRESS quiz whose questions have not moved for this long is treated as failed.
pub const STALE_AFTER_MS: i64 = 30 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizStatus {
    Prepare,
    InProgress,
    Ready,
    ReadyWithError,
}

impl QuizStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizStatus::Prepare => "PREPARE",
            QuizStatus::InProgress => "IN_PROGRESS",
            QuizStatus::Ready => "READY",
            QuizStatus::ReadyWithError => "READY_WITH_ERROR",
        }
    }

    /// Status as readers should see it at `now`.
    pub fn effective(self, question_updated_at: Option<i64>, now: i64) -> QuizStatus {
        match (self, question_updated_at) {
            (QuizStatus::InProgress, Some(updated_at)) if updated_at < now - STALE_AFTER_MS => {
                QuizStatus::ReadyWithError
            }
            (status, _) => status,
        }
    }
}
