use crate::modules::questions::adapters::outbound::repository::QuestionRepository;
use crate::modules::questions::core::question::{NewQuestion, Question, QuestionOption};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Questions {
    rows: Vec<Question>,
    next_question_id: i64,
    next_option_id: i64,
}

#[derive(Default)]
pub struct InMemoryQuestionRepository {
    inner: RwLock<Questions>,
    is_offline: bool,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Question repository offline");
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn insert(&self, question: NewQuestion) -> anyhow::Result<Question> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        guard.next_question_id += 1;
        let id = guard.next_question_id;
        let mut options = Vec::with_capacity(question.options.len());
        for option in question.options {
            guard.next_option_id += 1;
            options.push(QuestionOption {
                id: guard.next_option_id,
                option_text: option.option_text,
                option_explanation: option.option_explanation,
                is_correct: option.is_correct,
            });
        }
        let stored = Question {
            id,
            content_entry_id: question.content_entry_id,
            question: question.question,
            question_type: question.question_type,
            chunk_index: question.chunk_index,
            question_index_in_chunk: question.question_index_in_chunk,
            options,
            created_at: question.created_at,
        };
        guard.rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_content_entry_ids(&self, ids: &[String]) -> anyhow::Result<Vec<Question>> {
        self.ensure_online()?;
        let mut found: Vec<Question> = self
            .inner
            .read()
            .await
            .rows
            .iter()
            .filter(|question| ids.contains(&question.content_entry_id))
            .cloned()
            .collect();
        found.sort_by_key(|question| question.id);
        Ok(found)
    }

    async fn delete_by_content_entry_id(&self, content_entry_id: &str) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.inner
            .write()
            .await
            .rows
            .retain(|question| question.content_entry_id != content_entry_id);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_question_repository_tests {
    use super::*;
    use crate::tests::fixtures::questions::NewQuestionBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> InMemoryQuestionRepository {
        InMemoryQuestionRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_assign_increasing_ids_to_questions_and_options(
        before_each: InMemoryQuestionRepository,
    ) {
        let repository = before_each;
        let first = repository.insert(NewQuestionBuilder::new().build()).await.unwrap();
        let second = repository.insert(NewQuestionBuilder::new().build()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        let option_ids: Vec<i64> = first
            .options
            .iter()
            .chain(second.options.iter())
            .map(|option| option.id)
            .collect();
        assert_eq!(option_ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_find_and_delete_by_content_entry(before_each: InMemoryQuestionRepository) {
        let repository = before_each;
        repository
            .insert(NewQuestionBuilder::new().content_entry_id("entry-2").build())
            .await
            .unwrap();
        repository
            .insert(NewQuestionBuilder::new().content_entry_id("entry-1").build())
            .await
            .unwrap();
        let found = repository
            .find_by_content_entry_ids(&["entry-1".to_string(), "entry-2".to_string()])
            .await
            .unwrap();
        assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2]);

        repository.delete_by_content_entry_id("entry-2").await.unwrap();
        let left = repository
            .find_by_content_entry_ids(&["entry-1".to_string(), "entry-2".to_string()])
            .await
            .unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].content_entry_id, "entry-1");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline(before_each: InMemoryQuestionRepository) {
        let mut repository = before_each;
        repository.toggle_offline();
        let result = repository.find_by_content_entry_ids(&[]).await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Question repository offline")
        );
    }
}
