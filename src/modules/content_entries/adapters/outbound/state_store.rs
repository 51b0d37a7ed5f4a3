use crate::modules::content_entries::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::core::entry::ContentEntry;
use crate::modules::content_entries::core::events::ContentEntryEvent;
use crate::modules::content_entries::core::evolve::evolve;
use crate::modules::content_entries::core::intents::ContentEntryIntent;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

/// Folds the accepted events into `current`, enqueues the intents and then stores or removes
/// the entry. `content_entry_id` names the stream when `current` is `None`.
///
/// Versions continue from the last one written for the id. A rejected enqueue leaves the
/// repository untouched.
pub async fn commit(
    repository: &dyn ContentEntryRepository,
    outbox: &impl DomainOutbox,
    content_entry_id: &str,
    current: Option<ContentEntry>,
    events: Vec<ContentEntryEvent>,
    intents: Vec<ContentEntryIntent>,
) -> Result<Option<ContentEntry>, ApplicationError> {
    let base_version = match &current {
        Some(entry) => entry.version,
        None if events.is_empty() => 0,
        None => repository.stream_version(content_entry_id).await?,
    };
    let next_version = base_version + events.len() as i64;
    let existed = current.is_some();
    let mut next = events.iter().fold(current, evolve);
    if let Some(entry) = next.as_mut() {
        entry.version = next_version;
    }

    dispatch_intents(outbox, content_entry_id, base_version, intents).await?;
    if !events.is_empty() {
        match &next {
            Some(entry) => repository.save(entry.clone()).await?,
            None if existed => repository.delete(content_entry_id, next_version).await?,
            None => {}
        }
    }
    Ok(next)
}
