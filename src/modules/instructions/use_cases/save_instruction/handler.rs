use crate::modules::instructions::adapters::outbound::repository::InstructionRepository;
use crate::modules::instructions::core::instruction::Instruction;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::now_millis;
use std::sync::Arc;

pub struct SaveInstructionHandler {
    repository: Arc<dyn InstructionRepository>,
}

impl SaveInstructionHandler {
    pub fn new(repository: Arc<dyn InstructionRepository>) -> Self {
        Self { repository }
    }

    /// Creates the user's instruction or overwrites the existing one.
    pub async fn handle(
        &self,
        user_id: &str,
        instruction: &str,
    ) -> Result<Instruction, ApplicationError> {
        let instruction = Instruction {
            user_id: user_id.to_string(),
            instruction: instruction.trim().to_string(),
            updated_at: now_millis(),
        };
        self.repository.upsert(instruction.clone()).await?;
        tracing::info!(user_id, "instruction saved");
        Ok(instruction)
    }
}
