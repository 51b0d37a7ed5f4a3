// In memory projection repository, watermark repository and quiz queries.
//
// Purpose
// - Exercise projectors and query handlers without a database.

use crate::modules::quizzes::adapters::outbound::projections::{
    QuizProjectionRepository, WatermarkRepository,
};
use crate::modules::quizzes::core::status::QuizStatus;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::projection::QuizRow;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::queries_port::QuizQueries;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, QuizRow>>,
    watermark: RwLock<HashMap<String, i64>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_rows_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl QuizProjectionRepository for InMemoryProjections {
    async fn get(&self, quiz_id: &str) -> anyhow::Result<Option<QuizRow>> {
        self.ensure_rows_online()?;
        Ok(self.rows.read().await.get(quiz_id).cloned())
    }

    async fn upsert(&self, row: QuizRow) -> anyhow::Result<()> {
        self.ensure_rows_online()?;
        self.rows.write().await.insert(row.quiz_id.clone(), row);
        Ok(())
    }

    async fn delete(&self, quiz_id: &str) -> anyhow::Result<()> {
        self.ensure_rows_online()?;
        self.rows.write().await.remove(quiz_id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<i64>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }
        Ok(self.watermark.read().await.get(name).copied())
    }

    async fn set(&self, name: &str, position: i64) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }
        self.watermark
            .write()
            .await
            .insert(name.to_string(), position);
        Ok(())
    }
}

#[async_trait::async_trait]
impl QuizQueries for InMemoryProjections {
    async fn find_by_id(&self, user_id: &str, quiz_id: &str) -> anyhow::Result<Option<QuizRow>> {
        self.ensure_rows_online()?;
        Ok(self
            .rows
            .read()
            .await
            .get(quiz_id)
            .filter(|row| row.user_id == user_id)
            .cloned())
    }

    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<QuizRow>> {
        self.ensure_rows_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<QuizRow> = guard
            .values()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.quiz_id.cmp(&a.quiz_id))
        });
        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn list_generating_by_user_id(&self, user_id: &str) -> anyhow::Result<Vec<QuizRow>> {
        self.ensure_rows_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|row| row.user_id == user_id)
            .filter(|row| matches!(row.status, QuizStatus::Prepare | QuizStatus::InProgress))
            .cloned()
            .collect())
    }
}
