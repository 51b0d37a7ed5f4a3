use crate::modules::content_banks::core::bank::ContentBank;
use crate::modules::content_banks::core::decision::{DecideError, Decision};
use crate::modules::content_banks::core::events::ContentBankEvent;
use crate::modules::content_banks::core::events::v1::content_bank_deleted::ContentBankDeletedV1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContentBank {
    pub content_bank_id: String,
    pub user_id: String,
    pub deleted_at: i64,
}

pub fn decide_delete(current: Option<&ContentBank>, command: DeleteContentBank) -> Decision {
    match current {
        Some(bank) if bank.user_id == command.user_id => Decision::Accepted {
            events: vec![ContentBankEvent::ContentBankDeletedV1(ContentBankDeletedV1 {
                content_bank_id: bank.id.clone(),
                user_id: command.user_id,
                deleted_at: command.deleted_at,
            })],
        },
        _ => Decision::Rejected {
            reason: DecideError::NotFound,
        },
    }
}
