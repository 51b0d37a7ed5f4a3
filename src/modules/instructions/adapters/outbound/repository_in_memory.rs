use crate::modules::instructions::adapters::outbound::repository::InstructionRepository;
use crate::modules::instructions::core::instruction::Instruction;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryInstructionRepository {
    by_user: RwLock<HashMap<String, Instruction>>,
    is_offline: bool,
}

impl InMemoryInstructionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait]
impl InstructionRepository for InMemoryInstructionRepository {
    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Option<Instruction>> {
        if self.is_offline {
            anyhow::bail!("Instruction repository offline");
        }
        Ok(self.by_user.read().await.get(user_id).cloned())
    }

    async fn upsert(&self, instruction: Instruction) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Instruction repository offline");
        }
        self.by_user
            .write()
            .await
            .insert(instruction.user_id.clone(), instruction);
        Ok(())
    }
}
