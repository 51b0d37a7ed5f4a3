use crate::shared::infrastructure::pub_sub::{PubSub, PubSubError};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde_json::Value as Json;

/// Redis `PUBLISH` adapter. Clones of the connection manager share one multiplexed connection.
#[derive(Clone)]
pub struct RedisPubSub {
    conn_manager: ConnectionManager,
}

impl RedisPubSub {
    pub async fn new(redis_url: &str) -> Result<Self, PubSubError> {
        let client = Client::open(redis_url).map_err(|e| {
            PubSubError::ConnectionFailed(format!("Failed to create Redis client: {e}"))
        })?;
        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            PubSubError::ConnectionFailed(format!("Failed to create Redis connection manager: {e}"))
        })?;
        tracing::info!("RedisPubSub initialized");
        Ok(Self { conn_manager })
    }
}

#[async_trait::async_trait]
impl PubSub for RedisPubSub {
    async fn publish(&self, channel: &str, payload: &Json) -> Result<(), PubSubError> {
        let body = serde_json::to_string(payload).map_err(|e| PubSubError::PublishFailed {
            channel: channel.to_string(),
            reason: format!("Failed to serialize payload: {e}"),
        })?;
        let mut conn = self.conn_manager.clone();
        let receivers: i64 =
            conn.publish(channel, body)
                .await
                .map_err(|e| PubSubError::PublishFailed {
                    channel: channel.to_string(),
                    reason: e.to_string(),
                })?;
        tracing::debug!(channel = %channel, receivers, "Published to Redis channel");
        Ok(())
    }
}

#[cfg(test)]
mod redis_pub_sub_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[tokio::test]
    #[ignore]
    async fn integration_redis_should_publish_a_message() {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into());
        let pub_sub = RedisPubSub::new(&url).await.unwrap();
        let result = pub_sub
            .publish("quiz-generation:user-id:user-0001", &json!({"progress": {}}))
            .await;
        assert!(result.is_ok());
    }
}
