use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::intents::QuizIntent;
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Quiz already exists")]
    AlreadyExists,

    #[error("Quiz not found or you do not have permission to access it")]
    NotFound,

    #[error("Quiz has been deleted")]
    Deleted,

    #[error("Quiz is already completed")]
    Completed,

    #[error("Invalid question option selected")]
    InvalidOption,

    #[error("Question configuration error")]
    MisconfiguredQuestion,
}

#[derive(Debug)]
pub enum Decision {
    Accepted {
        events: Vec<QuizEvent>,
        intents: Vec<QuizIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    /// Accepts a single event and announces it on the quiz topic.
    pub fn record(event: QuizEvent) -> Self {
        Decision::Accepted {
            events: vec![event.clone()],
            intents: vec![QuizIntent::PublishQuizEvent { event }],
        }
    }

    /// Accepted, nothing to record.
    pub fn unchanged() -> Self {
        Decision::Accepted {
            events: Vec::new(),
            intents: Vec::new(),
        }
    }

    pub fn reject(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::AlreadyExists => ApplicationError::Conflict(reason.to_string()),
            DecideError::NotFound | DecideError::Deleted => {
                ApplicationError::NotFound(reason.to_string())
            }
            DecideError::Completed
            | DecideError::InvalidOption
            | DecideError::MisconfiguredQuestion => ApplicationError::Domain(reason.to_string()),
        }
    }
}
