use crate::modules::content_banks::use_cases::create_default_content_bank::handler::{
    CreateDefaultContentBankHandler, USER_VERIFIED_EVENT, UserVerified,
};
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::event_bus::integration_event::IntegrationEnvelope;
use crate::shared::infrastructure::event_bus::{InboundMessage, MessageHandler};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct UserVerifiedAttributes {
    aggregate_id: String,
}

/// Consumer side of `auth.user.verified`.
pub struct UserVerifiedMessageHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    handler: CreateDefaultContentBankHandler<TOutbox>,
}

impl<TOutbox> UserVerifiedMessageHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(handler: CreateDefaultContentBankHandler<TOutbox>) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl<TOutbox> MessageHandler for UserVerifiedMessageHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    async fn handle(&self, message: InboundMessage) -> anyhow::Result<()> {
        let envelope = match IntegrationEnvelope::<UserVerifiedAttributes>::parse(&message.payload) {
            Ok(envelope) => envelope,
            Err(error) => {
                tracing::error!(topic = %message.topic, error = %error, "failed to parse user verified message");
                return Ok(());
            }
        };
        if envelope.data.event_type != USER_VERIFIED_EVENT {
            tracing::warn!(event_type = %envelope.data.event_type, "unexpected event on user verified topic");
            return Ok(());
        }
        tracing::info!(user_id = %envelope.data.attributes.aggregate_id, "user verified");
        self.handler
            .handle(UserVerified {
                event_id: envelope.data.event_id,
                user_id: envelope.data.attributes.aggregate_id,
                verified_at: now_millis(),
            })
            .await?;
        Ok(())
    }
}
