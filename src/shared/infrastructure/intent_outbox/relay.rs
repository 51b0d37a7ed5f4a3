// Outbox relay: forwards pending outbox rows to the event bus in enqueue order.
//
// A row is marked dispatched only after the bus accepted it, so a crash in between publishes
// it again. Consumers see at-least-once delivery.

use crate::shared::infrastructure::event_bus::EventBus;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

pub struct OutboxRelay<TOutbox, TEventBus>
where
    TOutbox: DomainOutbox + ?Sized,
    TEventBus: EventBus + ?Sized,
{
    outbox: Arc<TOutbox>,
    event_bus: Arc<TEventBus>,
}

impl<TOutbox, TEventBus> OutboxRelay<TOutbox, TEventBus>
where
    TOutbox: DomainOutbox + ?Sized,
    TEventBus: EventBus + ?Sized,
{
    pub fn new(outbox: Arc<TOutbox>, event_bus: Arc<TEventBus>) -> Self {
        Self { outbox, event_bus }
    }

    /// Publishes up to `batch_size` rows and returns how many went out. Stops at the first
    /// failed publish so later rows never overtake it.
    pub async fn run_once(&self, batch_size: usize) -> anyhow::Result<usize> {
        let rows = self.outbox.pending(batch_size).await?;
        let mut dispatched = 0;
        for row in rows {
            self.event_bus
                .publish(&row.topic, &row.key, &row.payload)
                .await?;
            self.outbox
                .mark_dispatched(&row.stream_id, row.stream_version, &row.event_type)
                .await?;
            tracing::debug!(
                topic = %row.topic,
                stream_id = %row.stream_id,
                stream_version = row.stream_version,
                event_type = %row.event_type,
                "outbox row dispatched"
            );
            dispatched += 1;
        }
        Ok(dispatched)
    }

    pub async fn run(
        self,
        batch_size: usize,
        interval: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) {
        tracing::info!("outbox relay started");
        loop {
            match self.run_once(batch_size).await {
                Ok(dispatched) if dispatched == batch_size => continue,
                Ok(_) => {}
                Err(error) => {
                    tracing::error!(error = %error, "outbox relay batch failed");
                }
            }
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = shutdown.changed() => {
                    tracing::info!("outbox relay stopped");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod outbox_relay_tests {
    use super::*;
    use crate::shared::infrastructure::event_bus::in_memory::InMemoryEventBus;
    use crate::shared::infrastructure::intent_outbox::OutboxRow;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn row(stream_version: i64) -> OutboxRow {
        OutboxRow {
            topic: "quiz.events".into(),
            key: "quiz-fixed-0001".into(),
            event_type: "QuizCreated".into(),
            event_version: 1,
            stream_id: "Quiz-quiz-fixed-0001".into(),
            stream_version,
            occurred_at: 1_700_000_000_000,
            payload: json!({ "v": stream_version }),
        }
    }

    #[fixture]
    fn before_each() -> Arc<InMemoryDomainOutbox> {
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        for version in 1..=3 {
            futures::executor::block_on(outbox.enqueue(row(version))).unwrap();
        }
        outbox
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_publish_pending_rows_in_order_once(before_each: Arc<InMemoryDomainOutbox>) {
        let outbox = before_each;
        let bus = Arc::new(InMemoryEventBus::new());
        let relay = OutboxRelay::new(outbox.clone(), bus.clone());

        assert_eq!(relay.run_once(2).await.unwrap(), 2);
        assert_eq!(relay.run_once(10).await.unwrap(), 1);
        assert_eq!(relay.run_once(10).await.unwrap(), 0);

        let published = bus.published_to("quiz.events").await;
        let versions: Vec<_> = published.iter().map(|m| m.payload["v"].clone()).collect();
        assert_eq!(versions, vec![json!(1), json!(2), json!(3)]);
        assert!(outbox.pending(10).await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_rows_pending_when_the_bus_is_down(
        before_each: Arc<InMemoryDomainOutbox>,
    ) {
        let outbox = before_each;
        let mut bus = InMemoryEventBus::new();
        bus.toggle_offline();
        let relay = OutboxRelay::new(outbox.clone(), Arc::new(bus));

        assert!(relay.run_once(10).await.is_err());
        assert_eq!(outbox.pending(10).await.unwrap().len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_stop_on_shutdown(before_each: Arc<InMemoryDomainOutbox>) {
        let bus = Arc::new(InMemoryEventBus::new());
        let relay = OutboxRelay::new(before_each, bus.clone());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let worker = tokio::spawn(relay.run(10, Duration::from_secs(60), shutdown_rx));
        shutdown_tx.send(true).unwrap();
        worker.await.unwrap();
        assert_eq!(bus.published().await.len(), 3);
    }
}
