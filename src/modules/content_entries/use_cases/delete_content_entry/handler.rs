use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::adapters::outbound::state_store::commit;
use crate::modules::content_entries::core::decision::Decision;
use crate::modules::content_entries::use_cases::delete_content_entry::decide::{
    DeleteContentEntry, decide_delete,
};
use crate::modules::questions::adapters::outbound::repository::QuestionRepository;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

/// Removes the entry with its topic links and the questions generated from it.
pub struct DeleteContentEntryHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    entries: Arc<dyn ContentEntryRepository>,
    questions: Arc<dyn QuestionRepository>,
    outbox: Arc<TOutbox>,
}

impl<TOutbox> DeleteContentEntryHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        entries: Arc<dyn ContentEntryRepository>,
        questions: Arc<dyn QuestionRepository>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            entries,
            questions,
            outbox,
        }
    }

    pub async fn handle(&self, command: DeleteContentEntry) -> Result<(), ApplicationError> {
        let current = self.entries.get(&command.content_entry_id).await?;
        let content_entry_id = command.content_entry_id.clone();
        match decide_delete(current.as_ref(), command) {
            Decision::Accepted { events, intents } => {
                commit(
                    &*self.entries,
                    &*self.outbox,
                    &content_entry_id,
                    current,
                    events,
                    intents,
                )
                .await?;
                self.questions
                    .delete_by_content_entry_id(&content_entry_id)
                    .await?;
                tracing::info!(content_entry_id = %content_entry_id, "content entry deleted");
                Ok(())
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}

#[cfg(test)]
mod delete_content_entry_handler_tests {
    use super::*;
    use crate::modules::content_entries::adapters::outbound::repository_in_memory::InMemoryContentEntryRepository;
    use crate::modules::questions::adapters::outbound::repository_in_memory::InMemoryQuestionRepository;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::entries::ContentEntryBuilder;
    use crate::tests::fixtures::questions::NewQuestionBuilder;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (
        Arc<InMemoryContentEntryRepository>,
        Arc<InMemoryQuestionRepository>,
        DeleteContentEntryHandler<InMemoryDomainOutbox>,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let entries = Arc::new(InMemoryContentEntryRepository::new());
        let questions = Arc::new(InMemoryQuestionRepository::new());
        let handler = DeleteContentEntryHandler::new(
            entries.clone(),
            questions.clone(),
            Arc::new(InMemoryDomainOutbox::new()),
        );
        (entries, questions, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_the_entry_and_its_questions(before_each: BeforeEachReturn) {
        let (entries, questions, handler) = before_each;
        let entry = ContentEntryBuilder::new().build();
        entries.save(entry.clone()).await.unwrap();
        questions
            .insert(NewQuestionBuilder::new().content_entry_id(entry.id.as_str()).build())
            .await
            .unwrap();

        handler
            .handle(DeleteContentEntry {
                content_entry_id: entry.id.clone(),
                user_id: entry.user_id.clone(),
                deleted_at: 5,
            })
            .await
            .unwrap();

        assert!(entries.get(&entry.id).await.unwrap().is_none());
        assert!(
            questions
                .find_by_content_entry_ids(&[entry.id.clone()])
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_delete_entries_of_other_users(before_each: BeforeEachReturn) {
        let (entries, _, handler) = before_each;
        let entry = ContentEntryBuilder::new().build();
        entries.save(entry.clone()).await.unwrap();
        let result = handler
            .handle(DeleteContentEntry {
                content_entry_id: entry.id.clone(),
                user_id: "intruder".into(),
                deleted_at: 5,
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
        assert!(entries.get(&entry.id).await.unwrap().is_some());
    }
}
