use crate::modules::content_entries::core::events::ContentEntryEvent;
use crate::modules::content_entries::core::intents::ContentEntryIntent;
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Content bank not found or does not belong to user")]
    BankNotFound,

    #[error("Content entry not found or access denied")]
    NotFound,

    #[error("Content entry is still being analyzed")]
    StillPending,

    #[error("Content entry ID already exists")]
    IdTaken,
}

#[derive(Debug)]
pub enum Decision {
    Accepted {
        events: Vec<ContentEntryEvent>,
        intents: Vec<ContentEntryIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    /// Accepts one event and announces it on the entry topic.
    pub fn record(event: ContentEntryEvent) -> Self {
        Decision::Accepted {
            events: vec![event.clone()],
            intents: vec![ContentEntryIntent::PublishContentEntryEvent { event }],
        }
    }

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
            DecideError::BankNotFound | DecideError::NotFound => {
                ApplicationError::NotFound(reason.to_string())
            }
            DecideError::StillPending | DecideError::IdTaken => {
                ApplicationError::Conflict(reason.to_string())
            }
        }
    }
}
