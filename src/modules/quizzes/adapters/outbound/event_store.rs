use crate::modules::quizzes::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::quizzes::core::decision::DecideError;
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::evolve::evolve;
use crate::modules::quizzes::core::intents::QuizIntent;
use crate::modules::quizzes::core::state::QuizState;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::stream_id;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub fn quiz_stream_id(quiz_id: &str) -> String {
    stream_id("Quiz", quiz_id)
}

pub struct LoadedQuiz {
    pub state: QuizState,
    pub version: i64,
}

fn store_error(error: EventStoreError) -> ApplicationError {
    match error {
        EventStoreError::Forbidden { .. } => ApplicationError::from(DecideError::NotFound),
        EventStoreError::Backend(message) => ApplicationError::Unexpected(message),
        mismatch @ EventStoreError::VersionMismatch { .. } => {
            ApplicationError::VersionConflict(mismatch)
        }
    }
}

/// Replays the quiz stream. A stream owned by someone else reads as not found.
pub async fn load_quiz<TEventStore>(
    event_store: &TEventStore,
    user_id: &str,
    quiz_id: &str,
) -> Result<LoadedQuiz, ApplicationError>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
{
    let stream = event_store
        .load(user_id, &quiz_stream_id(quiz_id))
        .await
        .map_err(store_error)?;
    let state = stream.events.into_iter().fold(QuizState::None, evolve);
    Ok(LoadedQuiz {
        state,
        version: stream.version,
    })
}

/// Appends the accepted events at `expected_version` and enqueues the intents.
/// Returns the stream version after the append.
pub async fn commit<TEventStore, TOutbox>(
    event_store: &TEventStore,
    outbox: &TOutbox,
    user_id: &str,
    quiz_id: &str,
    expected_version: i64,
    events: Vec<QuizEvent>,
    intents: Vec<QuizIntent>,
) -> Result<i64, ApplicationError>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    if events.is_empty() {
        return Ok(expected_version);
    }
    let stream_id = quiz_stream_id(quiz_id);
    event_store
        .append(user_id, &stream_id, expected_version, &events)
        .await
        .map_err(store_error)?;
    let version = expected_version + events.len() as i64;
    dispatch_intents(outbox, user_id, &stream_id, version, intents)
        .await
        .map_err(ApplicationError::Outbox)?;
    Ok(version)
}
