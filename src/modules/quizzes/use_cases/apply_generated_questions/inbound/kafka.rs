use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::use_cases::apply_generated_questions::handler::ApplyGeneratedQuestionsHandler;
use crate::modules::quizzes::use_cases::apply_generated_questions::payload::QuizGenerationMessage;
use crate::shared::infrastructure::event_bus::{InboundMessage, MessageHandler};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use async_trait::async_trait;

/// Consumer side of `quiz-generation`.
pub struct QuizGenerationMessageHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    handler: ApplyGeneratedQuestionsHandler<TEventStore, TOutbox>,
}

impl<TEventStore, TOutbox> QuizGenerationMessageHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(handler: ApplyGeneratedQuestionsHandler<TEventStore, TOutbox>) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl<TEventStore, TOutbox> MessageHandler for QuizGenerationMessageHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    async fn handle(&self, message: InboundMessage) -> anyhow::Result<()> {
        let payload: QuizGenerationMessage = match serde_json::from_str(&message.payload) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::error!(topic = %message.topic, error = %error, "failed to parse quiz generation message");
                return Ok(());
            }
        };
        tracing::info!(
            quiz_id = %payload.quiz_id,
            chunk = payload.current_chunk_index,
            total_chunks = payload.total_chunks,
            "received quiz generation chunk"
        );
        let quiz_id = payload.quiz_id.clone();
        if let Err(error) = self.handler.handle(payload).await {
            tracing::error!(quiz_id = %quiz_id, error = %error, "failed to apply quiz generation chunk");
            return Err(error.into());
        }
        Ok(())
    }
}
