use crate::modules::content_banks::adapters::outbound::intent_outbox::publish_events;
use crate::modules::content_banks::adapters::outbound::repository::ContentBankRepository;
use crate::modules::content_banks::core::bank::ContentBank;
use crate::modules::content_banks::core::events::ContentBankEvent;
use crate::modules::content_banks::core::evolve::evolve;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

/// Folds the accepted events into `current`, publishes them and then stores the result (or
/// removes the bank). Returns the new state.
///
/// Versions continue from the last one written for the id, so a bank recreated after deletion
/// never reuses an outbox key. A rejected enqueue leaves the repository untouched.
pub async fn commit(
    repository: &dyn ContentBankRepository,
    outbox: &impl DomainOutbox,
    current: Option<ContentBank>,
    events: Vec<ContentBankEvent>,
) -> Result<Option<ContentBank>, ApplicationError> {
    let Some(first) = events.first() else {
        return Ok(current);
    };
    let content_bank_id = first.content_bank_id().to_string();
    let base_version = match &current {
        Some(bank) => bank.version,
        None => repository.stream_version(&content_bank_id).await?,
    };
    let next_version = base_version + events.len() as i64;
    let existed = current.is_some();
    let mut next = events.iter().fold(current, evolve);
    if let Some(bank) = next.as_mut() {
        bank.version = next_version;
    }

    publish_events(outbox, base_version, &events).await?;
    match &next {
        Some(bank) => repository.save(bank.clone()).await?,
        None if existed => repository.delete(&content_bank_id, next_version).await?,
        None => {}
    }
    Ok(next)
}
