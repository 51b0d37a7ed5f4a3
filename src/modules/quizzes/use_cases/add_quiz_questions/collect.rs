use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::core::entry::{ContentEntry, ContentType};
use crate::modules::questions::adapters::outbound::repository::QuestionRepository;
use crate::modules::quizzes::core::status::QuizStatus;
use crate::modules::quizzes::use_cases::add_quiz_questions::command::{
    AddQuizQuestions, CandidateOption, CandidateQuestion,
};
use crate::modules::topics::adapters::outbound::repository::TopicRepository;
use crate::shared::core::errors::ApplicationError;
use std::collections::HashMap;
use std::sync::Arc;

/// Everything a bank currently offers to a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankQuestions {
    pub questions: Vec<CandidateQuestion>,
    pub topics: Vec<String>,
    pub content_entries_count: i32,
}

impl BankQuestions {
    pub fn into_command(
        self,
        quiz_id: &str,
        user_id: &str,
        status: QuizStatus,
        updated_at: i64,
    ) -> AddQuizQuestions {
        AddQuizQuestions {
            quiz_id: quiz_id.to_string(),
            user_id: user_id.to_string(),
            status,
            questions: self.questions,
            topics: self.topics,
            content_entries_count: self.content_entries_count,
            updated_at,
        }
    }
}

/// Reads the bank's entries, their generated questions and their topic names.
pub struct BankQuestionCollector {
    entries: Arc<dyn ContentEntryRepository>,
    questions: Arc<dyn QuestionRepository>,
    topics: Arc<dyn TopicRepository>,
}

impl BankQuestionCollector {
    pub fn new(
        entries: Arc<dyn ContentEntryRepository>,
        questions: Arc<dyn QuestionRepository>,
        topics: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            entries,
            questions,
            topics,
        }
    }

    pub async fn collect(
        &self,
        user_id: &str,
        content_bank_id: &str,
    ) -> Result<BankQuestions, ApplicationError> {
        let entries = self.entries.list_by_bank(content_bank_id).await?;
        let entry_ids: Vec<String> = entries.iter().map(|entry| entry.id.clone()).collect();
        let by_id: HashMap<&str, &ContentEntry> = entries
            .iter()
            .map(|entry| (entry.id.as_str(), entry))
            .collect();

        let questions = self
            .questions
            .find_by_content_entry_ids(&entry_ids)
            .await?
            .into_iter()
            .map(|question| {
                let entry = by_id.get(question.content_entry_id.as_str());
                CandidateQuestion {
                    question: question.question,
                    question_type: question.question_type,
                    content_entry_type: entry
                        .map_or(ContentType::SelectedText, |entry| entry.content_type)
                        .as_str()
                        .to_string(),
                    content_entry_source_url: entry.and_then(|entry| entry.source_url.clone()),
                    content_entry_id: question.content_entry_id,
                    chunk_index: question.chunk_index,
                    question_index_in_chunk: question.question_index_in_chunk,
                    options: question
                        .options
                        .into_iter()
                        .map(|option| CandidateOption {
                            option_text: option.option_text,
                            option_explanation: option.option_explanation,
                            is_correct: option.is_correct,
                        })
                        .collect(),
                }
            })
            .collect();

        let mut topic_ids: Vec<String> = entries
            .iter()
            .flat_map(|entry| entry.topic_ids.iter().cloned())
            .collect();
        topic_ids.sort();
        topic_ids.dedup();
        let topics = self
            .topics
            .find_by_ids(user_id, &topic_ids)
            .await?
            .into_iter()
            .map(|topic| topic.name)
            .collect();

        Ok(BankQuestions {
            questions,
            topics,
            content_entries_count: entries.len() as i32,
        })
    }
}
