use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::status::QuizStatus;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::queries_port::QuizQueries;
use crate::modules::quizzes::use_cases::update_quiz_status::decide::UpdateQuizStatus;
use crate::modules::quizzes::use_cases::update_quiz_status::handler::UpdateQuizStatusHandler;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizInProgressDetails {
    pub quiz_id: String,
    pub content_bank_id: String,
    pub bank_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizInProgress {
    pub in_progress: bool,
    pub details: Option<QuizInProgressDetails>,
}

/// Reports the user's quiz still being generated. Generation that went stale is persisted as
/// READY_WITH_ERROR on the way.
pub struct CheckQuizInProgressHandler<TQueries, TEventStore, TOutbox>
where
    TQueries: QuizQueries + Send + Sync + 'static,
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    queries: Arc<TQueries>,
    update_status: UpdateQuizStatusHandler<TEventStore, TOutbox>,
}

impl<TQueries, TEventStore, TOutbox> CheckQuizInProgressHandler<TQueries, TEventStore, TOutbox>
where
    TQueries: QuizQueries + Send + Sync + 'static,
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        queries: Arc<TQueries>,
        update_status: UpdateQuizStatusHandler<TEventStore, TOutbox>,
    ) -> Self {
        Self {
            queries,
            update_status,
        }
    }

    pub async fn handle(&self, user_id: &str) -> Result<QuizInProgress, ApplicationError> {
        let now = now_millis();
        let mut details = None;
        for row in self.queries.list_generating_by_user_id(user_id).await? {
            match row.status.effective(row.question_updated_at, now) {
                QuizStatus::ReadyWithError => {
                    tracing::warn!(quiz_id = %row.quiz_id, "quiz generation went stale");
                    self.update_status
                        .handle(UpdateQuizStatus {
                            quiz_id: row.quiz_id.clone(),
                            user_id: user_id.to_string(),
                            status: QuizStatus::ReadyWithError,
                            updated_at: now,
                        })
                        .await?;
                }
                QuizStatus::Prepare | QuizStatus::InProgress => {
                    details = Some(QuizInProgressDetails {
                        quiz_id: row.quiz_id,
                        content_bank_id: row.content_bank_id,
                        bank_name: row.bank_name,
                    });
                }
                QuizStatus::Ready => {}
            }
        }
        Ok(QuizInProgress {
            in_progress: details.is_some(),
            details,
        })
    }
}
