// Kafka adapters for the EventBus port, built on rdkafka.
//
// KafkaEventBus publishes JSON payloads with a string key.
// KafkaConsumer subscribes to topics and feeds every message to a MessageHandler. Offsets are
// committed manually once the handler returned, so a crash mid-handle redelivers the message.

use crate::shared::infrastructure::event_bus::{
    EventBus, EventBusError, InboundMessage, MessageHandler,
};
use futures::StreamExt;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::message::Message;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use serde_json::Value as Json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

pub struct KafkaEventBus {
    producer: FutureProducer,
    timeout: Duration,
}

impl KafkaEventBus {
    pub fn new(brokers: &str, timeout: Duration) -> Result<Self, EventBusError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", timeout.as_millis().to_string())
            .set("acks", "all")
            .create()
            .map_err(|e| {
                EventBusError::ConnectionFailed(format!("Failed to create producer: {e}"))
            })?;
        tracing::info!(brokers = %brokers, "Kafka producer created");
        Ok(Self { producer, timeout })
    }
}

#[async_trait::async_trait]
impl EventBus for KafkaEventBus {
    async fn publish(&self, topic: &str, key: &str, payload: &Json) -> Result<(), EventBusError> {
        let body = serde_json::to_string(payload).map_err(|e| EventBusError::PublishFailed {
            topic: topic.to_string(),
            reason: format!("Failed to serialize payload: {e}"),
        })?;
        let record = FutureRecord::to(topic).payload(&body).key(key);
        match self
            .producer
            .send(record, Timeout::After(self.timeout))
            .await
        {
            Ok((partition, offset)) => {
                tracing::debug!(topic = %topic, key = %key, partition, offset, "Message published");
                Ok(())
            }
            Err((kafka_error, _)) => {
                tracing::error!(topic = %topic, error = %kafka_error, "Failed to publish message");
                Err(EventBusError::PublishFailed {
                    topic: topic.to_string(),
                    reason: kafka_error.to_string(),
                })
            }
        }
    }
}

pub struct KafkaConsumer {
    consumer: StreamConsumer,
    topics: Vec<String>,
}

impl KafkaConsumer {
    pub fn new(brokers: &str, group_id: &str, topics: &[&str]) -> Result<Self, EventBusError> {
        let topics: Vec<String> = topics.iter().map(|topic| topic.to_string()).collect();
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("enable.auto.commit", "false")
            .set("auto.offset.reset", "earliest")
            .set("session.timeout.ms", "6000")
            .set("enable.partition.eof", "false")
            .create()
            .map_err(|e| EventBusError::SubscriptionFailed {
                topics: topics.clone(),
                reason: format!("Failed to create consumer: {e}"),
            })?;
        let topic_refs: Vec<&str> = topics.iter().map(String::as_str).collect();
        consumer
            .subscribe(&topic_refs)
            .map_err(|e| EventBusError::SubscriptionFailed {
                topics: topics.clone(),
                reason: format!("Failed to subscribe to topics: {e}"),
            })?;
        tracing::info!(topics = ?topics, group_id = %group_id, "Kafka consumer subscribed");
        Ok(Self { consumer, topics })
    }

    /// Runs until the shutdown flag flips to true or the stream ends.
    pub async fn run(self, handler: Arc<dyn MessageHandler>, mut shutdown: watch::Receiver<bool>) {
        let mut stream = self.consumer.stream();
        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        break;
                    }
                }
                next = stream.next() => {
                    let Some(result) = next else { break };
                    let message = match result {
                        Ok(message) => message,
                        Err(e) => {
                            tracing::warn!(error = %e, "Kafka error while consuming");
                            continue;
                        }
                    };
                    let inbound = InboundMessage {
                        topic: message.topic().to_string(),
                        key: message
                            .key()
                            .map(|key| String::from_utf8_lossy(key).into_owned()),
                        payload: match message.payload_view::<str>() {
                            Some(Ok(payload)) => payload.to_string(),
                            Some(Err(e)) => {
                                tracing::error!(topic = %message.topic(), error = %e, "Payload is not UTF-8");
                                String::new()
                            }
                            None => String::new(),
                        },
                    };
                    if let Err(e) = handler.handle(inbound).await {
                        tracing::error!(topic = %message.topic(), offset = message.offset(), error = %e, "Failed to process message");
                    }
                    if let Err(e) = self.consumer.commit_message(&message, CommitMode::Async) {
                        tracing::warn!(error = %e, "Failed to commit offset, message may be redelivered");
                    }
                }
            }
        }
        tracing::info!(topics = ?self.topics, "Kafka consumer stopped");
    }
}
