// Quiz projector: tails the global event log, folds quiz events into the read model and
// advances its watermark after every event.
//
// A crash between a row write and the watermark write replays that event on restart. The
// per-row applied version turns the replay into a no-op.

use crate::modules::quizzes::adapters::outbound::projections::{
    QuizProjectionRepository, WatermarkRepository,
};
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::projections::{Mutation, apply};
use crate::shared::infrastructure::event_store::{EventStore, StoredEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

pub const QUIZ_PROJECTOR: &str = "quiz-projector";

pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: QuizProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: QuizProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub async fn apply_one(&self, stored: &StoredEvent<QuizEvent>) -> anyhow::Result<()> {
        let current = self.repository.get(stored.event.quiz_id()).await?;
        for mutation in apply(
            &stored.stream_id,
            stored.version,
            &stored.event,
            current.as_ref(),
        ) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Delete { quiz_id } => self.repository.delete(&quiz_id).await?,
            }
        }
        self.watermark_repository
            .set(&self.name, stored.position)
            .await?;
        Ok(())
    }

    /// Applies the next batch after the watermark and returns how many events it held.
    pub async fn run_once<TEventStore>(
        &self,
        event_store: &TEventStore,
        batch_size: usize,
    ) -> anyhow::Result<usize>
    where
        TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    {
        let watermark = self
            .watermark_repository
            .get(&self.name)
            .await?
            .unwrap_or(0);
        let batch = event_store.read_from(watermark, batch_size).await?;
        for stored in &batch {
            self.apply_one(stored).await?;
        }
        Ok(batch.len())
    }

    /// Drains the log, then polls every `interval` until `shutdown` flips.
    pub async fn run<TEventStore>(
        self,
        event_store: Arc<TEventStore>,
        batch_size: usize,
        interval: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) where
        TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    {
        tracing::info!(projector = %self.name, "projector started");
        loop {
            match self.run_once(&*event_store, batch_size).await {
                Ok(applied) if applied == batch_size => continue,
                Ok(applied) => {
                    if applied > 0 {
                        tracing::debug!(projector = %self.name, applied, "projector caught up");
                    }
                }
                Err(error) => {
                    tracing::error!(projector = %self.name, error = %error, "projector batch failed");
                }
            }
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = shutdown.changed() => {
                    tracing::info!(projector = %self.name, "projector stopped");
                    return;
                }
            }
        }
    }
}
