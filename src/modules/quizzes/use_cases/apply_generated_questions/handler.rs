use crate::modules::content_entries::adapters::outbound::repository::find_owned;
use crate::modules::content_entries::core::decision::DecideError as EntryDecideError;
use crate::modules::content_entries::use_cases::mark_questions_generated::handler::MarkQuestionsGeneratedHandler;
use crate::modules::questions::core::question::NewQuestionOption;
use crate::modules::questions::use_cases::create_question::command::CreateQuestion;
use crate::modules::questions::use_cases::create_question::handler::CreateQuestionHandler;
use crate::modules::quizzes::adapters::outbound::event_store::load_quiz;
use crate::modules::quizzes::adapters::outbound::sources::QuizSources;
use crate::modules::quizzes::core::decision::DecideError;
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::state::QuizState;
use crate::modules::quizzes::core::status::QuizStatus;
use crate::modules::quizzes::use_cases::add_quiz_questions::handler::AddQuizQuestionsHandler;
use crate::modules::quizzes::use_cases::apply_generated_questions::payload::{
    GeneratedContentEntry, QuizGenerationMessage,
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use crate::shared::infrastructure::pub_sub::{PubSub, user_channel};
use std::sync::Arc;

pub const QUIZ_GENERATION_CHANNEL: &str = "quiz-generation";

/// Folds one generated chunk into the question bank and the quiz, then tells the user.
pub struct ApplyGeneratedQuestionsHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    sources: QuizSources,
    pub_sub: Arc<dyn PubSub>,
    create_question: CreateQuestionHandler,
    mark_generated: MarkQuestionsGeneratedHandler<TOutbox>,
    add_questions: AddQuizQuestionsHandler<TEventStore, TOutbox>,
}

impl<TEventStore, TOutbox> ApplyGeneratedQuestionsHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<QuizEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        sources: QuizSources,
        pub_sub: Arc<dyn PubSub>,
    ) -> Self {
        Self {
            create_question: CreateQuestionHandler::new(sources.questions.clone()),
            mark_generated: MarkQuestionsGeneratedHandler::new(
                sources.entries.clone(),
                outbox.clone(),
            ),
            add_questions: AddQuizQuestionsHandler::new(event_store.clone(), outbox),
            event_store,
            sources,
            pub_sub,
        }
    }

    pub async fn handle(&self, message: QuizGenerationMessage) -> Result<(), ApplicationError> {
        let quiz_id = message.quiz_id.as_str();
        let user_id = message.user_id.as_str();
        let loaded = load_quiz(&*self.event_store, user_id, quiz_id).await?;
        let quiz = match &loaded.state {
            QuizState::Active(quiz) => quiz,
            QuizState::None | QuizState::Deleted { .. } => {
                return Err(DecideError::NotFound.into());
            }
        };
        if quiz.status == QuizStatus::Ready {
            tracing::warn!(quiz_id, "quiz is not in progress, chunk skipped");
            return Ok(());
        }

        if message.total_chunks != 0 {
            if let Some(entry) = &message.content_entry {
                self.store_chunk(user_id, message.current_chunk_index, entry)
                    .await?;
                tracing::info!(
                    quiz_id,
                    content_entry_id = %entry.id,
                    chunk = message.current_chunk_index + 1,
                    total_chunks = message.total_chunks,
                    "chunk stored"
                );
            }
        }

        let status = if message.is_final_chunk() || message.content_entry.is_none() {
            QuizStatus::Ready
        } else {
            QuizStatus::InProgress
        };
        let collected = self
            .sources
            .collector()
            .collect(user_id, &quiz.content_bank_id)
            .await?;
        self.add_questions
            .handle(collected.into_command(quiz_id, user_id, status, now_millis()))
            .await?;

        let channel = user_channel(QUIZ_GENERATION_CHANNEL, user_id);
        if let Err(error) = self
            .pub_sub
            .publish(&channel, &message.progress_notification())
            .await
        {
            tracing::warn!(quiz_id, channel = %channel, error = %error, "progress notification dropped");
        }
        if status == QuizStatus::Ready {
            tracing::info!(quiz_id, "quiz generation finished");
        }
        Ok(())
    }

    async fn store_chunk(
        &self,
        user_id: &str,
        chunk_index: i32,
        entry: &GeneratedContentEntry,
    ) -> Result<(), ApplicationError> {
        find_owned(&*self.sources.entries, user_id, &entry.id)
            .await?
            .ok_or_else(|| ApplicationError::from(EntryDecideError::NotFound))?;
        for (index, question) in entry.questions.iter().enumerate() {
            self.create_question
                .handle(CreateQuestion {
                    content_entry_id: entry.id.clone(),
                    question: question.question.clone(),
                    chunk_index,
                    question_index_in_chunk: index as i32,
                    options: question
                        .options
                        .iter()
                        .map(|option| NewQuestionOption {
                            option_text: option.option_text.clone(),
                            option_explanation: option.option_explanation.clone(),
                            is_correct: option.is_correct,
                        })
                        .collect(),
                })
                .await?;
        }
        self.mark_generated.handle(&entry.id).await
    }
}
