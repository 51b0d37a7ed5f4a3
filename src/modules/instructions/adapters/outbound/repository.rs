use crate::modules::instructions::core::instruction::Instruction;
use async_trait::async_trait;

#[async_trait]
pub trait InstructionRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Option<Instruction>>;

    /// Replaces the user's instruction.
    async fn upsert(&self, instruction: Instruction) -> anyhow::Result<()>;
}
