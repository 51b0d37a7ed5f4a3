// Background workers of the binary. Every worker watches the same shutdown flag.

use crate::shared::infrastructure::event_bus::EventBus;
use crate::shared::infrastructure::event_bus::kafka::KafkaConsumer;
use crate::shell::config::Config;
use crate::shell::state::AppState;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const OUTBOX_BATCH_SIZE: usize = 100;

pub struct Workers {
    shutdown: watch::Sender<bool>,
    handles: Vec<JoinHandle<()>>,
}

impl Workers {
    /// Flips the shutdown flag and waits for every worker to return.
    pub async fn shutdown(self) {
        if self.shutdown.send(true).is_err() {
            tracing::warn!("every worker already stopped");
        }
        for handle in self.handles {
            if let Err(error) = handle.await {
                tracing::error!(error = %error, "worker panicked");
            }
        }
        tracing::info!("workers stopped");
    }
}

/// Spawns the outbox relay, the quiz projector and the Kafka listeners.
pub fn spawn(
    config: &Config,
    state: &AppState,
    event_bus: Arc<dyn EventBus>,
) -> anyhow::Result<Workers> {
    let (shutdown, shutdown_rx) = watch::channel(false);
    let mut handles = Vec::new();

    handles.push(tokio::spawn(state.outbox_relay(event_bus).run(
        OUTBOX_BATCH_SIZE,
        config.outbox_poll_interval,
        shutdown_rx.clone(),
    )));

    handles.push(tokio::spawn(state.projector().run(
        state.event_store.clone(),
        config.projector_batch_size,
        config.outbox_poll_interval,
        shutdown_rx.clone(),
    )));

    let quiz_generation = KafkaConsumer::new(
        &config.kafka_brokers,
        &config.kafka_consumer_group,
        &[config.quiz_generation_topic.as_str()],
    )?;
    handles.push(tokio::spawn(
        quiz_generation.run(state.quiz_generation_listener(), shutdown_rx.clone()),
    ));

    let content_entry_events = KafkaConsumer::new(
        &config.kafka_brokers,
        &config.kafka_consumer_group,
        &[config.content_entry_events_topic.as_str()],
    )?;
    handles.push(tokio::spawn(
        content_entry_events.run(state.content_entry_topics_listener(), shutdown_rx.clone()),
    ));

    let user_verified = KafkaConsumer::new(
        &config.kafka_brokers,
        &config.kafka_consumer_group,
        &[config.user_verified_topic.as_str()],
    )?;
    handles.push(tokio::spawn(
        user_verified.run(state.user_verified_listener(), shutdown_rx.clone()),
    ));

    let topics_failed = KafkaConsumer::new(
        &config.kafka_brokers,
        &config.kafka_consumer_group,
        &[config.topics_failed_topic.as_str()],
    )?;
    handles.push(tokio::spawn(
        topics_failed.run(state.topics_failed_listener(), shutdown_rx),
    ));

    tracing::info!(workers = handles.len(), "workers started");
    Ok(Workers { shutdown, handles })
}
