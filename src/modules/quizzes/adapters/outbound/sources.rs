use crate::modules::content_banks::adapters::outbound::repository::ContentBankRepository;
use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::instructions::adapters::outbound::repository::InstructionRepository;
use crate::modules::questions::adapters::outbound::repository::QuestionRepository;
use crate::modules::quizzes::use_cases::add_quiz_questions::collect::BankQuestionCollector;
use crate::modules::topics::adapters::outbound::repository::TopicRepository;
use std::sync::Arc;

/// Repositories of the other modules that quizzes read from.
#[derive(Clone)]
pub struct QuizSources {
    pub banks: Arc<dyn ContentBankRepository>,
    pub entries: Arc<dyn ContentEntryRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub topics: Arc<dyn TopicRepository>,
    pub instructions: Arc<dyn InstructionRepository>,
}

impl QuizSources {
    pub fn collector(&self) -> BankQuestionCollector {
        BankQuestionCollector::new(
            self.entries.clone(),
            self.questions.clone(),
            self.topics.clone(),
        )
    }
}
