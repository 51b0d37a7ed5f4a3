use crate::shared::core::errors::ApplicationError;
use crate::modules::content_banks::core::events::ContentBankEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("A content bank with this name already exists")]
    NameTaken,

    #[error("Content bank ID belongs to another user")]
    BelongsToAnotherUser,

    #[error("Content bank name must not be blank")]
    BlankName,

    #[error("Content bank not found or access denied")]
    NotFound,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { events: Vec<ContentBankEvent> },
    Rejected { reason: DecideError },
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::NameTaken | DecideError::BelongsToAnotherUser => {
                ApplicationError::Conflict(reason.to_string())
            }
            DecideError::NotFound => ApplicationError::NotFound(reason.to_string()),
            DecideError::BlankName => ApplicationError::Domain(reason.to_string()),
        }
    }
}
