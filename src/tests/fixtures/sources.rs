use crate::modules::content_banks::adapters::outbound::repository::ContentBankRepository;
use crate::modules::content_banks::adapters::outbound::repository_in_memory::InMemoryContentBankRepository;
use crate::modules::content_entries::adapters::outbound::repository_in_memory::InMemoryContentEntryRepository;
use crate::modules::instructions::adapters::outbound::repository_in_memory::InMemoryInstructionRepository;
use crate::modules::questions::adapters::outbound::repository_in_memory::InMemoryQuestionRepository;
use crate::modules::quizzes::adapters::outbound::sources::QuizSources;
use crate::modules::topics::adapters::outbound::repository_in_memory::InMemoryTopicRepository;
use crate::tests::fixtures::banks::ContentBankBuilder;
use std::sync::Arc;

/// In-memory repositories behind `QuizSources`, kept concrete so tests can seed them.
pub struct InMemorySources {
    pub banks: Arc<InMemoryContentBankRepository>,
    pub entries: Arc<InMemoryContentEntryRepository>,
    pub questions: Arc<InMemoryQuestionRepository>,
    pub topics: Arc<InMemoryTopicRepository>,
    pub instructions: Arc<InMemoryInstructionRepository>,
}

impl Default for InMemorySources {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySources {
    pub fn new() -> Self {
        Self {
            banks: Arc::new(InMemoryContentBankRepository::new()),
            entries: Arc::new(InMemoryContentEntryRepository::new()),
            questions: Arc::new(InMemoryQuestionRepository::new()),
            topics: Arc::new(InMemoryTopicRepository::new()),
            instructions: Arc::new(InMemoryInstructionRepository::new()),
        }
    }

    /// Seeded with the default "bank-fixed-0001".
    pub fn with_bank() -> Self {
        let sources = Self::new();
        futures::executor::block_on(sources.banks.save(ContentBankBuilder::new().build()))
            .expect("seed bank");
        sources
    }

    pub fn sources(&self) -> QuizSources {
        QuizSources {
            banks: self.banks.clone(),
            entries: self.entries.clone(),
            questions: self.questions.clone(),
            topics: self.topics.clone(),
            instructions: self.instructions.clone(),
        }
    }
}
