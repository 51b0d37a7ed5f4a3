use crate::modules::instructions::adapters::outbound::repository::InstructionRepository;
use crate::modules::instructions::core::instruction::Instruction;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

pub struct FindInstructionHandler {
    repository: Arc<dyn InstructionRepository>,
}

impl FindInstructionHandler {
    pub fn new(repository: Arc<dyn InstructionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &str) -> Result<Option<Instruction>, ApplicationError> {
        Ok(self.repository.find_by_user(user_id).await?)
    }

    /// The text to send along with a generation request, empty when the user never set one.
    pub async fn instruction_text(&self, user_id: &str) -> Result<String, ApplicationError> {
        Ok(self
            .handle(user_id)
            .await?
            .map(|instruction| instruction.instruction)
            .unwrap_or_default())
    }
}
