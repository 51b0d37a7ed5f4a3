use crate::modules::content_entries::use_cases::discard_failed_topics::handler::{
    CharacterMessage, DiscardFailedTopicsHandler, TOPICS_FAILED_EVENT, TopicsFailed,
};
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::event_bus::integration_event::IntegrationEnvelope;
use crate::shared::infrastructure::event_bus::{InboundMessage, MessageHandler};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TopicsFailedAttributes {
    aggregate_id: String,
    user_id: String,
    #[serde(default)]
    character_message: Option<String>,
    #[serde(default)]
    character_sprite_url: Option<String>,
    #[serde(default)]
    character_animate_to: Option<i32>,
    #[serde(default)]
    character_animate_seconds: Option<i32>,
}

impl From<TopicsFailedAttributes> for TopicsFailed {
    fn from(attributes: TopicsFailedAttributes) -> Self {
        let character = attributes
            .character_message
            .map(|character_message| CharacterMessage {
                character_message,
                character_sprite_url: attributes.character_sprite_url,
                character_animate_to: attributes.character_animate_to,
                character_animate_seconds: attributes.character_animate_seconds,
            });
        Self {
            content_entry_id: attributes.aggregate_id,
            user_id: attributes.user_id,
            character,
            failed_at: now_millis(),
        }
    }
}

/// Consumer side of `ai_content_entry.topics_failed`.
pub struct TopicsFailedMessageHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    handler: DiscardFailedTopicsHandler<TOutbox>,
}

impl<TOutbox> TopicsFailedMessageHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(handler: DiscardFailedTopicsHandler<TOutbox>) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl<TOutbox> MessageHandler for TopicsFailedMessageHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    async fn handle(&self, message: InboundMessage) -> anyhow::Result<()> {
        let envelope = match IntegrationEnvelope::<TopicsFailedAttributes>::parse(&message.payload)
        {
            Ok(envelope) => envelope,
            Err(error) => {
                tracing::error!(topic = %message.topic, error = %error, "failed to parse topics failed message");
                return Ok(());
            }
        };
        if envelope.data.event_type != TOPICS_FAILED_EVENT {
            tracing::warn!(event_type = %envelope.data.event_type, "unexpected event on topics failed topic");
            return Ok(());
        }
        tracing::info!(
            content_entry_id = %envelope.data.attributes.aggregate_id,
            "topic generation failed"
        );
        self.handler.handle(envelope.data.attributes.into()).await?;
        Ok(())
    }
}
