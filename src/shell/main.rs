use quiz_core::shared::infrastructure::event_bus::kafka::KafkaEventBus;
use quiz_core::shared::infrastructure::pub_sub::redis_pub_sub::RedisPubSub;
use quiz_core::shell::config::Config;
use quiz_core::shell::state::AppState;
use quiz_core::shell::workers;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env();
    tracing::info!(
        brokers = %config.kafka_brokers,
        group = %config.kafka_consumer_group,
        "starting quiz_core"
    );

    let pub_sub = Arc::new(RedisPubSub::new(&config.redis_url).await?);
    let event_bus = Arc::new(KafkaEventBus::new(
        &config.kafka_brokers,
        Duration::from_secs(5),
    )?);

    // In-memory stores for now
    let state = AppState::in_memory(pub_sub);
    let workers = workers::spawn(&config, &state, event_bus)?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown requested");
    workers.shutdown().await;
    Ok(())
}
