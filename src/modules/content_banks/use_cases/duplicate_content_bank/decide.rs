use crate::modules::content_banks::core::bank::{ContentBank, copy_name, normalize_bank_name};
use crate::modules::content_banks::core::decision::{DecideError, Decision};
use crate::modules::content_banks::core::events::ContentBankEvent;
use crate::modules::content_banks::core::events::v1::content_bank_created::ContentBankCreatedV1;
use crate::modules::content_banks::use_cases::duplicate_content_bank::command::DuplicateContentBank;

/// Name the copy will carry.
pub fn duplicate_name(source: &ContentBank, requested: Option<&str>) -> String {
    requested
        .and_then(normalize_bank_name)
        .unwrap_or_else(|| copy_name(&source.name).trim().to_string())
}

pub fn decide_duplicate(
    source: Option<&ContentBank>,
    name_holder: Option<&ContentBank>,
    command: DuplicateContentBank,
) -> Decision {
    let Some(source) = source.filter(|bank| bank.user_id == command.user_id) else {
        return Decision::Rejected {
            reason: DecideError::NotFound,
        };
    };
    if name_holder.is_some() {
        return Decision::Rejected {
            reason: DecideError::NameTaken,
        };
    }
    Decision::Accepted {
        events: vec![ContentBankEvent::ContentBankCreatedV1(ContentBankCreatedV1 {
            content_bank_id: command.new_content_bank_id,
            user_id: command.user_id,
            name: duplicate_name(source, command.name.as_deref()),
            created_at: command.created_at,
        })],
    }
}
