use crate::modules::content_entries::core::intents::{ContentEntryTopicsMessage, SAVE_ACTION};
use crate::modules::content_entries::use_cases::apply_generated_topics::handler::ApplyGeneratedTopicsHandler;
use crate::shared::infrastructure::event_bus::{InboundMessage, MessageHandler};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use async_trait::async_trait;

/// Consumer side of `content-entry-events`. Only `SAVE` messages are handled, our own
/// `GENERATE` requests on the same topic are skipped.
pub struct TopicsMessageHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    handler: ApplyGeneratedTopicsHandler<TOutbox>,
}

impl<TOutbox> TopicsMessageHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(handler: ApplyGeneratedTopicsHandler<TOutbox>) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl<TOutbox> MessageHandler for TopicsMessageHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    async fn handle(&self, message: InboundMessage) -> anyhow::Result<()> {
        let payload: ContentEntryTopicsMessage = match serde_json::from_str(&message.payload) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::error!(topic = %message.topic, error = %error, "failed to parse content entry message");
                return Ok(());
            }
        };
        if payload.action != SAVE_ACTION {
            return Ok(());
        }
        tracing::info!(
            content_entry_id = %payload.content_id,
            topics = payload.topics.as_ref().map_or(0, Vec::len),
            "processing generated topics"
        );
        self.handler.handle(payload).await?;
        Ok(())
    }
}

#[cfg(test)]
mod topics_message_handler_tests {
    use super::*;
    use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
    use crate::modules::content_entries::adapters::outbound::repository_in_memory::InMemoryContentEntryRepository;
    use crate::modules::topics::adapters::outbound::repository_in_memory::InMemoryTopicRepository;
    use crate::modules::topics::use_cases::find_or_create_topic::handler::FindOrCreateTopicHandler;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::entries::ContentEntryBuilder;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    #[fixture]
    fn before_each() -> (
        Arc<InMemoryContentEntryRepository>,
        TopicsMessageHandler<InMemoryDomainOutbox>,
    ) {
        let entries = Arc::new(InMemoryContentEntryRepository::new());
        let handler = TopicsMessageHandler::new(ApplyGeneratedTopicsHandler::new(
            entries.clone(),
            FindOrCreateTopicHandler::new(Arc::new(InMemoryTopicRepository::new())),
            Arc::new(InMemoryDomainOutbox::new()),
        ));
        (entries, handler)
    }

    fn inbound(payload: &str) -> InboundMessage {
        InboundMessage {
            topic: "content-entry-events".into(),
            key: Some("content-entry-entry-fixed-0001".into()),
            payload: payload.into(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_save_messages(
        before_each: (
            Arc<InMemoryContentEntryRepository>,
            TopicsMessageHandler<InMemoryDomainOutbox>,
        ),
    ) {
        let (entries, handler) = before_each;
        entries.save(ContentEntryBuilder::new().build()).await.unwrap();
        handler
            .handle(inbound(
                r#"{"userId":"user-fixed-0001","contentId":"entry-fixed-0001","action":"SAVE","topics":["Ownership"]}"#,
            ))
            .await
            .unwrap();
        let entry = entries.get("entry-fixed-0001").await.unwrap().unwrap();
        assert_eq!(entry.topic_ids.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_ignore_generate_requests_and_garbage(
        before_each: (
            Arc<InMemoryContentEntryRepository>,
            TopicsMessageHandler<InMemoryDomainOutbox>,
        ),
    ) {
        let (entries, handler) = before_each;
        entries.save(ContentEntryBuilder::new().build()).await.unwrap();
        handler
            .handle(inbound(
                r#"{"userId":"user-fixed-0001","contentId":"entry-fixed-0001","action":"GENERATE","content":"x","pageTitle":"t","existingTopics":"","topics":null}"#,
            ))
            .await
            .unwrap();
        handler.handle(inbound("not json")).await.unwrap();
        let entry = entries.get("entry-fixed-0001").await.unwrap().unwrap();
        assert!(entry.topic_ids.is_empty());
    }
}
