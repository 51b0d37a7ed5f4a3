use chrono::Utc;
use uuid::Uuid;

/// Milliseconds since the unix epoch. Every timestamp in events and read models uses this unit.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

pub fn stream_id(prefix: &str, id: &str) -> String {
    format!("{prefix}-{id}")
}
