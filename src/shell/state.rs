use crate::modules::content_banks::adapters::outbound::repository_in_memory::InMemoryContentBankRepository;
use crate::modules::content_banks::use_cases::create_content_bank::handler::CreateContentBankHandler;
use crate::modules::content_banks::use_cases::create_default_content_bank::handler::CreateDefaultContentBankHandler;
use crate::modules::content_banks::use_cases::create_default_content_bank::inbound::kafka::UserVerifiedMessageHandler;
use crate::modules::content_entries::adapters::outbound::repository_in_memory::InMemoryContentEntryRepository;
use crate::modules::content_entries::use_cases::apply_generated_topics::handler::ApplyGeneratedTopicsHandler;
use crate::modules::content_entries::use_cases::apply_generated_topics::inbound::kafka::TopicsMessageHandler;
use crate::modules::content_entries::use_cases::delete_content_entry::handler::DeleteContentEntryHandler;
use crate::modules::content_entries::use_cases::discard_failed_topics::handler::DiscardFailedTopicsHandler;
use crate::modules::content_entries::use_cases::discard_failed_topics::inbound::kafka::TopicsFailedMessageHandler;
use crate::modules::instructions::adapters::outbound::repository_in_memory::InMemoryInstructionRepository;
use crate::modules::questions::adapters::outbound::repository_in_memory::InMemoryQuestionRepository;
use crate::modules::quizzes::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::quizzes::adapters::outbound::sources::QuizSources;
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::use_cases::apply_generated_questions::handler::ApplyGeneratedQuestionsHandler;
use crate::modules::quizzes::use_cases::apply_generated_questions::inbound::kafka::QuizGenerationMessageHandler;
use crate::modules::quizzes::use_cases::create_quiz::handler::CreateQuizHandler;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::runner::{Projector, QUIZ_PROJECTOR};
use crate::modules::topics::adapters::outbound::repository_in_memory::InMemoryTopicRepository;
use crate::modules::topics::use_cases::find_or_create_topic::handler::FindOrCreateTopicHandler;
use crate::shared::infrastructure::event_bus::{EventBus, MessageHandler};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shared::infrastructure::intent_outbox::relay::OutboxRelay;
use crate::shared::infrastructure::processed_events::ProcessedEventRepository;
use crate::shared::infrastructure::processed_events::in_memory::InMemoryProcessedEvents;
use crate::shared::infrastructure::pub_sub::PubSub;
use std::sync::Arc;

pub type QuizEventStore = InMemoryEventStore<QuizEvent>;

/// Shared infrastructure and the handlers built on it.
#[derive(Clone)]
pub struct AppState {
    pub event_store: Arc<QuizEventStore>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    pub projections: Arc<InMemoryProjections>,
    pub sources: QuizSources,
    pub processed_events: Arc<dyn ProcessedEventRepository>,
    pub pub_sub: Arc<dyn PubSub>,
}

impl AppState {
    pub fn in_memory(pub_sub: Arc<dyn PubSub>) -> Self {
        Self {
            event_store: Arc::new(InMemoryEventStore::new()),
            outbox: Arc::new(InMemoryDomainOutbox::new()),
            projections: Arc::new(InMemoryProjections::new()),
            sources: QuizSources {
                banks: Arc::new(InMemoryContentBankRepository::new()),
                entries: Arc::new(InMemoryContentEntryRepository::new()),
                questions: Arc::new(InMemoryQuestionRepository::new()),
                topics: Arc::new(InMemoryTopicRepository::new()),
                instructions: Arc::new(InMemoryInstructionRepository::new()),
            },
            processed_events: Arc::new(InMemoryProcessedEvents::new()),
            pub_sub,
        }
    }

    pub fn create_quiz(
        &self,
    ) -> CreateQuizHandler<InMemoryProjections, QuizEventStore, InMemoryDomainOutbox> {
        CreateQuizHandler::new(
            self.event_store.clone(),
            self.outbox.clone(),
            self.projections.clone(),
            self.sources.clone(),
        )
    }

    pub fn projector(&self) -> Projector<InMemoryProjections, InMemoryProjections> {
        Projector::new(
            QUIZ_PROJECTOR,
            self.projections.clone(),
            self.projections.clone(),
        )
    }

    pub fn outbox_relay(
        &self,
        event_bus: Arc<dyn EventBus>,
    ) -> OutboxRelay<InMemoryDomainOutbox, dyn EventBus> {
        OutboxRelay::new(self.outbox.clone(), event_bus)
    }

    /// Listener for generated question chunks.
    pub fn quiz_generation_listener(&self) -> Arc<dyn MessageHandler> {
        Arc::new(QuizGenerationMessageHandler::new(
            ApplyGeneratedQuestionsHandler::new(
                self.event_store.clone(),
                self.outbox.clone(),
                self.sources.clone(),
                self.pub_sub.clone(),
            ),
        ))
    }

    /// Listener for generated content entry topics.
    pub fn content_entry_topics_listener(&self) -> Arc<dyn MessageHandler> {
        Arc::new(TopicsMessageHandler::new(ApplyGeneratedTopicsHandler::new(
            self.sources.entries.clone(),
            FindOrCreateTopicHandler::new(self.sources.topics.clone()),
            self.outbox.clone(),
        )))
    }

    /// Listener giving verified users their default bank.
    pub fn user_verified_listener(&self) -> Arc<dyn MessageHandler> {
        Arc::new(UserVerifiedMessageHandler::new(
            CreateDefaultContentBankHandler::new(
                CreateContentBankHandler::new(self.sources.banks.clone(), self.outbox.clone()),
                self.processed_events.clone(),
            ),
        ))
    }

    /// Listener discarding entries whose topic generation failed.
    pub fn topics_failed_listener(&self) -> Arc<dyn MessageHandler> {
        Arc::new(TopicsFailedMessageHandler::new(DiscardFailedTopicsHandler::new(
            DeleteContentEntryHandler::new(
                self.sources.entries.clone(),
                self.sources.questions.clone(),
                self.outbox.clone(),
            ),
            self.pub_sub.clone(),
        )))
    }
}
