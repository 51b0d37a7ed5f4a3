use crate::modules::content_banks::core::bank::{ContentBank, normalize_bank_name};
use crate::modules::content_banks::core::decision::{DecideError, Decision};
use crate::modules::content_banks::core::events::ContentBankEvent;
use crate::modules::content_banks::core::events::v1::content_bank_created::ContentBankCreatedV1;
use crate::modules::content_banks::core::events::v1::content_bank_renamed::ContentBankRenamedV1;
use crate::modules::content_banks::use_cases::create_content_bank::command::CreateContentBank;

/// `existing` is the bank stored under the command's id, `name_holder` the user's bank that
/// already carries the trimmed name. Creating over an own bank renames it.
pub fn decide_create(
    existing: Option<&ContentBank>,
    name_holder: Option<&ContentBank>,
    command: CreateContentBank,
) -> Decision {
    let Some(name) = normalize_bank_name(&command.name) else {
        return Decision::Rejected {
            reason: DecideError::BlankName,
        };
    };
    if name_holder.is_some_and(|bank| bank.id != command.content_bank_id) {
        return Decision::Rejected {
            reason: DecideError::NameTaken,
        };
    }
    match existing {
        Some(bank) if bank.user_id != command.user_id => Decision::Rejected {
            reason: DecideError::BelongsToAnotherUser,
        },
        Some(bank) if bank.name == name => Decision::Accepted { events: Vec::new() },
        Some(bank) => Decision::Accepted {
            events: vec![ContentBankEvent::ContentBankRenamedV1(ContentBankRenamedV1 {
                content_bank_id: bank.id.clone(),
                name,
                updated_at: command.created_at,
            })],
        },
        None => Decision::Accepted {
            events: vec![ContentBankEvent::ContentBankCreatedV1(ContentBankCreatedV1 {
                content_bank_id: command.content_bank_id,
                user_id: command.user_id,
                name,
                created_at: command.created_at,
            })],
        },
    }
}
