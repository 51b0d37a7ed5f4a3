use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::adapters::outbound::state_store::commit;
use crate::modules::content_entries::core::decision::Decision;
use crate::modules::content_entries::core::intents::ContentEntryTopicsMessage;
use crate::modules::content_entries::use_cases::apply_generated_topics::decide::decide_apply_topics;
use crate::modules::topics::use_cases::find_or_create_topic::handler::FindOrCreateTopicHandler;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct ApplyGeneratedTopicsHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    entries: Arc<dyn ContentEntryRepository>,
    topics: FindOrCreateTopicHandler,
    outbox: Arc<TOutbox>,
}

impl<TOutbox> ApplyGeneratedTopicsHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        entries: Arc<dyn ContentEntryRepository>,
        topics: FindOrCreateTopicHandler,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            entries,
            topics,
            outbox,
        }
    }

    pub async fn handle(&self, message: ContentEntryTopicsMessage) -> Result<(), ApplicationError> {
        let current = self.entries.get(&message.content_id).await?;
        let Some(entry) = current.as_ref() else {
            return Err(ApplicationError::NotFound(format!(
                "content entry {} not found",
                message.content_id
            )));
        };
        if !entry.topic_ids.is_empty() {
            tracing::warn!(content_entry_id = %entry.id, "content entry already has topics");
            return Ok(());
        }

        let mut topics = Vec::new();
        for name in message.topics.unwrap_or_default() {
            if name.trim().is_empty() {
                continue;
            }
            match self.topics.handle(&message.user_id, &name).await {
                Ok(topic) => topics.push(topic),
                Err(error) => {
                    tracing::error!(topic = %name, error = %error, "failed to create topic");
                }
            }
        }

        match decide_apply_topics(current.as_ref(), &topics, now_millis()) {
            Decision::Accepted { events, intents } => {
                commit(
                    &*self.entries,
                    &*self.outbox,
                    &message.content_id,
                    current,
                    events,
                    intents,
                )
                .await?;
                tracing::info!(
                    content_entry_id = %message.content_id,
                    topics = topics.len(),
                    "topics linked to content entry"
                );
                Ok(())
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
