use crate::modules::content_banks::adapters::outbound::repository::find_owned;
use crate::modules::content_banks::core::decision::DecideError as BankDecideError;
use crate::modules::instructions::use_cases::find_instruction::handler::FindInstructionHandler;
use crate::modules::quizzes::adapters::outbound::event_store::{commit, load_quiz};
use crate::modules::quizzes::adapters::outbound::sources::QuizSources;
use crate::modules::quizzes::core::decision::{DecideError, Decision};
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::intents::GenerationContentEntry;
use crate::modules::quizzes::use_cases::add_quiz_questions::handler::AddQuizQuestionsHandler;
use crate::modules::quizzes::use_cases::check_quiz_in_progress::handler::CheckQuizInProgressHandler;
use crate::modules::quizzes::use_cases::create_quiz::command::CreateQuiz;
use crate::modules::quizzes::use_cases::create_quiz::decide::decide_create;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::queries_port::QuizQueries;
use crate::modules::quizzes::use_cases::update_quiz_status::handler::UpdateQuizStatusHandler;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub const QUIZ_IN_PROGRESS: &str = "Quiz in progress";

pub struct CreateQuizHandler<TQueries, TEventStore, TOutbox>
where
    TQueries: QuizQueries + Send + Sync + 'static,
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
    sources: QuizSources,
    check_in_progress: CheckQuizInProgressHandler<TQueries, TEventStore, TOutbox>,
    add_questions: AddQuizQuestionsHandler<TEventStore, TOutbox>,
}

impl<TQueries, TEventStore, TOutbox> CreateQuizHandler<TQueries, TEventStore, TOutbox>
where
    TQueries: QuizQueries + Send + Sync + 'static,
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        queries: Arc<TQueries>,
        sources: QuizSources,
    ) -> Self {
        Self {
            check_in_progress: CheckQuizInProgressHandler::new(
                queries,
                UpdateQuizStatusHandler::new(event_store.clone(), outbox.clone()),
            ),
            add_questions: AddQuizQuestionsHandler::new(event_store.clone(), outbox.clone()),
            event_store,
            outbox,
            sources,
        }
    }

    /// Creates the quiz over an owned bank, asks for questions of the entries that have none
    /// yet and copies the questions the bank already has.
    pub async fn handle(
        &self,
        user_id: &str,
        content_bank_id: &str,
        quiz_id: &str,
    ) -> Result<(), ApplicationError> {
        if self.check_in_progress.handle(user_id).await?.in_progress {
            return Err(ApplicationError::Conflict(QUIZ_IN_PROGRESS.into()));
        }
        let bank = find_owned(&*self.sources.banks, user_id, content_bank_id)
            .await?
            .ok_or_else(|| ApplicationError::from(BankDecideError::NotFound))?;

        let mut content_entries = Vec::new();
        let mut entries_skipped = 0;
        for entry in self.sources.entries.list_by_bank(&bank.id).await? {
            if entry.questions_generated {
                entries_skipped += 1;
                continue;
            }
            content_entries.push(GenerationContentEntry {
                id: entry.id,
                page_title: entry.page_title,
                content: entry.content,
                word_count_analyzed: entry.word_count.unwrap_or(0),
            });
        }
        if content_entries.is_empty() {
            tracing::warn!(quiz_id, content_bank_id, "no content entries left to generate");
        }
        let instructions = FindInstructionHandler::new(self.sources.instructions.clone())
            .instruction_text(user_id)
            .await?;

        let loaded = match load_quiz(&*self.event_store, user_id, quiz_id).await {
            Err(ApplicationError::NotFound(_)) => {
                return Err(DecideError::AlreadyExists.into());
            }
            other => other?,
        };
        let command = CreateQuiz {
            quiz_id: quiz_id.to_string(),
            user_id: user_id.to_string(),
            content_bank_id: bank.id.clone(),
            bank_name: bank.name.clone(),
            instructions,
            content_entries,
            entries_skipped,
            created_at: now_millis(),
        };
        let status = command.initial_status();
        match decide_create(&loaded.state, command) {
            Decision::Accepted { events, intents } => {
                commit(
                    &*self.event_store,
                    &*self.outbox,
                    user_id,
                    quiz_id,
                    loaded.version,
                    events,
                    intents,
                )
                .await?;
            }
            Decision::Rejected { reason } => return Err(reason.into()),
        }
        tracing::info!(quiz_id, content_bank_id, status = status.as_str(), "quiz created");

        let collected = self.sources.collector().collect(user_id, &bank.id).await?;
        self.add_questions
            .handle(collected.into_command(quiz_id, user_id, status, now_millis()))
            .await?;
        Ok(())
    }
}
