use crate::modules::content_banks::core::bank::ContentBank;
use crate::modules::content_banks::core::events::ContentBankEvent;

/// State-stored evolve: the repository keeps the latest `ContentBank`, a deleted bank is `None`.
pub fn evolve(state: Option<ContentBank>, event: &ContentBankEvent) -> Option<ContentBank> {
    match (state, event) {
        (None, ContentBankEvent::ContentBankCreatedV1(e)) => Some(ContentBank {
            id: e.content_bank_id.clone(),
            user_id: e.user_id.clone(),
            name: e.name.clone(),
            created_at: e.created_at,
            updated_at: e.created_at,
            version: 1,
        }),
        (Some(mut bank), ContentBankEvent::ContentBankRenamedV1(e)) => {
            bank.name = e.name.clone();
            bank.updated_at = e.updated_at;
            bank.version += 1;
            Some(bank)
        }
        (Some(_), ContentBankEvent::ContentBankDeletedV1(_)) => None,
        (state, _) => state,
    }
}
