use crate::modules::quizzes::core::events::QuizEvent;
use serde::{Deserialize, Serialize};

/// Entry handed to the question generator. Field names follow the generator's JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContentEntry {
    pub id: String,
    pub page_title: String,
    pub content: String,
    pub word_count_analyzed: i32,
}

/// Body of the `create-quiz` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizGenerationRequest {
    pub instructions: String,
    pub content_entries: Vec<GenerationContentEntry>,
    pub entries_skipped: i32,
    pub quiz_id: String,
    pub user_id: String,
    pub bank_id: String,
}

/// Domain intents produced by the decider as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    PublishQuizEvent { event: QuizEvent },
    RequestQuestionGeneration { payload: QuizGenerationRequest },
}
