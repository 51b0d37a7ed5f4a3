use crate::modules::questions::adapters::outbound::repository::QuestionRepository;
use crate::modules::questions::core::question::{NewQuestion, Question, SINGLE_CHOICE};
use crate::modules::questions::use_cases::create_question::command::CreateQuestion;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::now_millis;
use std::sync::Arc;

pub struct CreateQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl CreateQuestionHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: CreateQuestion) -> Result<Question, ApplicationError> {
        let question = self
            .repository
            .insert(NewQuestion {
                content_entry_id: command.content_entry_id,
                question: command.question,
                question_type: SINGLE_CHOICE.to_string(),
                chunk_index: command.chunk_index,
                question_index_in_chunk: command.question_index_in_chunk,
                options: command.options,
                created_at: now_millis(),
            })
            .await?;
        tracing::debug!(
            question_id = question.id,
            content_entry_id = %question.content_entry_id,
            chunk_index = question.chunk_index,
            "question stored"
        );
        Ok(question)
    }
}
