// Runtime configuration, read from the environment once at startup. `.env` is loaded by
// main before this runs.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub kafka_brokers: String,
    pub kafka_consumer_group: String,
    pub redis_url: String,
    pub quiz_generation_topic: String,
    pub content_entry_events_topic: String,
    pub user_verified_topic: String,
    pub topics_failed_topic: String,
    pub outbox_poll_interval: Duration,
    pub projector_batch_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset or unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let number = |key: &str, default: u64| {
            lookup(key)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };
        Self {
            kafka_brokers: text("KAFKA_BROKERS", "localhost:9092"),
            kafka_consumer_group: text("KAFKA_CONSUMER_GROUP", "quiz-core"),
            redis_url: text("REDIS_URL", "redis://127.0.0.1:6379"),
            quiz_generation_topic: text("QUIZ_GENERATION_TOPIC", "quiz-generation"),
            content_entry_events_topic: text("CONTENT_ENTRY_EVENTS_TOPIC", "content-entry-events"),
            user_verified_topic: text("USER_VERIFIED_TOPIC", "auth.user.verified"),
            topics_failed_topic: text("TOPICS_FAILED_TOPIC", "ai_content_entry.topics_failed"),
            outbox_poll_interval: Duration::from_millis(number("OUTBOX_POLL_INTERVAL_MS", 500)),
            projector_batch_size: number("PROJECTOR_BATCH_SIZE", 100) as usize,
        }
    }
}
