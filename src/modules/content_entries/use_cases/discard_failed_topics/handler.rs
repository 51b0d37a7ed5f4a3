use crate::modules::content_entries::use_cases::delete_content_entry::decide::DeleteContentEntry;
use crate::modules::content_entries::use_cases::delete_content_entry::handler::DeleteContentEntryHandler;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use crate::shared::infrastructure::pub_sub::{PubSub, user_channel};
use serde::Serialize;
use std::sync::Arc;

pub const TOPICS_FAILED_EVENT: &str = "ai_content_entry.topics_failed";
pub const CHARACTER_MESSAGE_CHANNEL: &str = "character.message.ephemeral";

/// What the assistant character tells the user about the failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMessage {
    pub character_message: String,
    #[serde(rename = "characterSpriteURL")]
    pub character_sprite_url: Option<String>,
    pub character_animate_to: Option<i32>,
    pub character_animate_seconds: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicsFailed {
    pub content_entry_id: String,
    pub user_id: String,
    pub character: Option<CharacterMessage>,
    pub failed_at: i64,
}

/// Topic generation gave up on an entry: the entry goes away and the user hears why.
pub struct DiscardFailedTopicsHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    delete: DeleteContentEntryHandler<TOutbox>,
    pub_sub: Arc<dyn PubSub>,
}

impl<TOutbox> DiscardFailedTopicsHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(delete: DeleteContentEntryHandler<TOutbox>, pub_sub: Arc<dyn PubSub>) -> Self {
        Self { delete, pub_sub }
    }

    pub async fn handle(&self, failure: TopicsFailed) -> Result<(), ApplicationError> {
        let deleted = self
            .delete
            .handle(DeleteContentEntry {
                content_entry_id: failure.content_entry_id.clone(),
                user_id: failure.user_id.clone(),
                deleted_at: failure.failed_at,
            })
            .await;
        match deleted {
            Ok(()) => {}
            Err(ApplicationError::NotFound(_)) => {
                tracing::info!(content_entry_id = %failure.content_entry_id, "content entry already gone");
                return Ok(());
            }
            Err(error) => return Err(error),
        }

        let Some(character) = failure
            .character
            .filter(|character| !character.character_message.is_empty())
        else {
            return Ok(());
        };
        let channel = user_channel(CHARACTER_MESSAGE_CHANNEL, &failure.user_id);
        let payload = serde_json::to_value(&character)
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        if let Err(error) = self.pub_sub.publish(&channel, &payload).await {
            tracing::error!(channel = %channel, error = %error, "failed to publish character message");
        }
        Ok(())
    }
}
