use crate::modules::content_banks::adapters::outbound::repository::{
    ContentBankRepository, find_owned,
};
use crate::modules::content_banks::adapters::outbound::state_store::commit;
use crate::modules::content_banks::core::bank::ContentBank;
use crate::modules::content_banks::core::decision::Decision;
use crate::modules::content_banks::use_cases::duplicate_content_bank::command::DuplicateContentBank;
use crate::modules::content_banks::use_cases::duplicate_content_bank::decide::{
    decide_duplicate, duplicate_name,
};
use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::adapters::outbound::state_store::commit as commit_entry;
use crate::modules::content_entries::core::intents::ContentEntryIntent;
use crate::modules::content_entries::use_cases::clone_content_entry::decide::cloned_entry_created;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::new_id;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

/// Copies an owned bank and every entry in it.
pub struct DuplicateContentBankHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    banks: Arc<dyn ContentBankRepository>,
    entries: Arc<dyn ContentEntryRepository>,
    outbox: Arc<TOutbox>,
}

impl<TOutbox> DuplicateContentBankHandler<TOutbox>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        banks: Arc<dyn ContentBankRepository>,
        entries: Arc<dyn ContentEntryRepository>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            banks,
            entries,
            outbox,
        }
    }

    pub async fn handle(
        &self,
        command: DuplicateContentBank,
    ) -> Result<ContentBank, ApplicationError> {
        let source =
            find_owned(&*self.banks, &command.user_id, &command.source_content_bank_id).await?;
        let name_holder = match &source {
            Some(bank) => {
                let name = duplicate_name(bank, command.name.as_deref());
                self.banks.find_by_name(&command.user_id, &name).await?
            }
            None => None,
        };
        let new_content_bank_id = command.new_content_bank_id.clone();
        let created_at = command.created_at;
        let copy = match decide_duplicate(source.as_ref(), name_holder.as_ref(), command) {
            Decision::Accepted { events } => commit(&*self.banks, &*self.outbox, None, events)
                .await?
                .ok_or_else(|| {
                    ApplicationError::Unexpected(format!(
                        "content bank {new_content_bank_id} missing after duplicate"
                    ))
                })?,
            Decision::Rejected { reason } => return Err(reason.into()),
        };

        let Some(source) = source else {
            return Ok(copy);
        };
        let originals = self.entries.list_by_bank(&source.id).await?;
        for original in &originals {
            let content_entry_id = new_id();
            let event = cloned_entry_created(original, &content_entry_id, &copy.id, created_at);
            commit_entry(
                &*self.entries,
                &*self.outbox,
                &content_entry_id,
                None,
                vec![event.clone()],
                vec![ContentEntryIntent::PublishContentEntryEvent { event }],
            )
            .await?;
        }
        tracing::info!(
            source_content_bank_id = %source.id,
            content_bank_id = %copy.id,
            entries = originals.len(),
            "content bank duplicated"
        );
        Ok(copy)
    }
}

#[cfg(test)]
mod duplicate_content_bank_handler_tests {
    use super::*;
    use crate::modules::content_banks::adapters::outbound::repository_in_memory::InMemoryContentBankRepository;
    use crate::modules::content_entries::adapters::outbound::repository_in_memory::InMemoryContentEntryRepository;
    use crate::modules::content_entries::core::entry::ContentEntryStatus;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::banks::ContentBankBuilder;
    use crate::tests::fixtures::entries::ContentEntryBuilder;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (
        Arc<InMemoryContentBankRepository>,
        Arc<InMemoryContentEntryRepository>,
        DuplicateContentBankHandler<InMemoryDomainOutbox>,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let banks = Arc::new(InMemoryContentBankRepository::new());
        let entries = Arc::new(InMemoryContentEntryRepository::new());
        let handler = DuplicateContentBankHandler::new(
            banks.clone(),
            entries.clone(),
            Arc::new(InMemoryDomainOutbox::new()),
        );
        (banks, entries, handler)
    }

    fn command(name: Option<&str>) -> DuplicateContentBank {
        DuplicateContentBank {
            source_content_bank_id: "bank-fixed-0001".into(),
            new_content_bank_id: "bank-copy".into(),
            user_id: "user-fixed-0001".into(),
            name: name.map(String::from),
            created_at: 9,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_copy_the_bank_and_every_entry(before_each: BeforeEachReturn) {
        let (banks, entries, handler) = before_each;
        banks.save(ContentBankBuilder::new().build()).await.unwrap();
        entries
            .save(
                ContentEntryBuilder::new()
                    .status(ContentEntryStatus::Analyzed)
                    .questions_generated(true)
                    .build(),
            )
            .await
            .unwrap();
        entries
            .save(ContentEntryBuilder::new().id("entry-pending").created_at(2).build())
            .await
            .unwrap();

        let copy = handler.handle(command(None)).await.unwrap();

        assert_eq!(copy.name, "Copy of Rust Book");
        let copied = entries.list_by_bank("bank-copy").await.unwrap();
        assert_eq!(copied.len(), 2);
        assert!(copied.iter().all(|entry| !entry.questions_generated));
        assert_eq!(entries.count_by_bank("bank-fixed-0001").await.unwrap(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_name_already_in_use(before_each: BeforeEachReturn) {
        let (banks, _, handler) = before_each;
        banks.save(ContentBankBuilder::new().build()).await.unwrap();
        let result = handler.handle(command(Some(" Rust Book "))).await;
        assert!(matches!(result, Err(ApplicationError::Conflict(_))));
        assert!(banks.get("bank-copy").await.unwrap().is_none());
    }
}
