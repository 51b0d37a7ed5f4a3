// In memory implementation of the EventStore port.
//
// Purpose
// - Support command handler tests and local development without a database.
//
// Responsibilities
// - Store events per (user, stream) and in one global log.
// - Enforce optimistic concurrency by checking the expected version.

use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::event_store::{
    EventStore, EventStoreError, LoadedStream, StoredEvent,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

struct Streams<Event> {
    owners: HashMap<String, String>,
    versions: HashMap<String, i64>,
    log: Vec<StoredEvent<Event>>,
}

impl<Event> Default for Streams<Event> {
    fn default() -> Self {
        Self {
            owners: HashMap::new(),
            versions: HashMap::new(),
            log: Vec::new(),
        }
    }
}

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    inner: RwLock<Streams<Event>>,
    is_offline: bool,
    delay_append_ms: AtomicU64,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Streams::default()),
            is_offline: false,
            delay_append_ms: AtomicU64::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_append_ms(&self, delay_ms: u64) {
        self.delay_append_ms.store(delay_ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

fn ensure_owner(
    owners: &HashMap<String, String>,
    user_id: &str,
    stream_id: &str,
) -> Result<(), EventStoreError> {
    match owners.get(stream_id) {
        Some(owner) if owner != user_id => Err(EventStoreError::Forbidden {
            stream_id: stream_id.to_string(),
        }),
        _ => Ok(()),
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(
        &self,
        user_id: &str,
        stream_id: &str,
    ) -> Result<LoadedStream<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        ensure_owner(&guard.owners, user_id, stream_id)?;
        let events = guard
            .log
            .iter()
            .filter(|stored| stored.stream_id == stream_id)
            .map(|stored| stored.event.clone())
            .collect();
        Ok(LoadedStream {
            events,
            version: guard.versions.get(stream_id).copied().unwrap_or(0),
        })
    }

    async fn append(
        &self,
        user_id: &str,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            // Writers that read the same version all sleep, the write lock picks the winner.
            let seen = self.inner.read().await.versions.get(stream_id).copied().unwrap_or(0);
            if seen != expected_version {
                return Err(EventStoreError::VersionMismatch {
                    expected: expected_version,
                    actual: seen,
                });
            }
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.inner.write().await;
        ensure_owner(&guard.owners, user_id, stream_id)?;
        let actual = guard.versions.get(stream_id).copied().unwrap_or(0);
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        if new_events.is_empty() {
            return Ok(());
        }

        let occurred_at = now_millis();
        let mut position = guard.log.last().map(|stored| stored.position).unwrap_or(0);
        for (index, event) in new_events.iter().enumerate() {
            position += 1;
            guard.log.push(StoredEvent {
                position,
                user_id: user_id.to_string(),
                stream_id: stream_id.to_string(),
                version: expected_version + index as i64 + 1,
                occurred_at,
                event: event.clone(),
            });
        }
        guard
            .owners
            .entry(stream_id.to_string())
            .or_insert_with(|| user_id.to_string());
        guard.versions.insert(
            stream_id.to_string(),
            expected_version + new_events.len() as i64,
        );
        Ok(())
    }

    async fn read_from(
        &self,
        after_position: i64,
        limit: usize,
    ) -> Result<Vec<StoredEvent<Event>>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .log
            .iter()
            .filter(|stored| stored.position > after_position)
            .take(limit)
            .cloned()
            .collect())
    }
}
