use crate::modules::quizzes::core::intents::QuizIntent;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

pub const QUIZ_EVENTS_TOPIC: &str = "quiz.events";
pub const CREATE_QUIZ_TOPIC: &str = "create-quiz";
pub const QUIZ_GENERATION_REQUESTED: &str = "QuizGenerationRequested";

/// Translate a list of domain intents into outbox rows and enqueue them.
/// `stream_version` is the event store stream version after the append; rows of one decision
/// share it and are told apart by their event type.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    user_id: &str,
    stream_id: &str,
    stream_version: i64,
    intents: Vec<QuizIntent>,
) -> Result<(), OutboxError> {
    for intent in intents {
        let row = match intent {
            QuizIntent::PublishQuizEvent { event } => OutboxRow {
                topic: QUIZ_EVENTS_TOPIC.to_string(),
                key: event.quiz_id().to_string(),
                event_type: event.event_type().to_string(),
                event_version: 1,
                stream_id: stream_id.to_string(),
                stream_version,
                occurred_at: event.occurred_at(),
                payload: serde_json::to_value(&event)
                    .map_err(|e| OutboxError::Validation(e.to_string()))?,
            },
            QuizIntent::RequestQuestionGeneration { payload } => OutboxRow {
                topic: CREATE_QUIZ_TOPIC.to_string(),
                key: format!("user-{user_id}"),
                event_type: QUIZ_GENERATION_REQUESTED.to_string(),
                event_version: 1,
                stream_id: stream_id.to_string(),
                stream_version,
                occurred_at: now_millis(),
                payload: serde_json::to_value(&payload)
                    .map_err(|e| OutboxError::Validation(e.to_string()))?,
            },
        };
        outbox.enqueue(row).await?;
    }
    Ok(())
}
