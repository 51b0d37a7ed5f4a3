use crate::modules::content_banks::core::bank::ContentBank;
use crate::modules::content_entries::core::decision::{DecideError, Decision};
use crate::modules::content_entries::core::entry::{
    ContentEntry, ContentEntryStatus, ContentType, count_words, normalize_content,
};
use crate::modules::content_entries::core::events::ContentEntryEvent;
use crate::modules::content_entries::core::events::v1::content_entry_created::ContentEntryCreatedV1;
use crate::modules::content_entries::core::events::v1::content_entry_updated::ContentEntryUpdatedV1;
use crate::modules::content_entries::core::intents::{
    ContentEntryIntent, ContentEntryTopicsMessage, GENERATE_ACTION,
};
use crate::modules::content_entries::use_cases::create_content_entry::command::CreateContentEntry;

/// Asks the analyser for the entry's topics, listing the names the user already has.
pub fn topic_generation_request(
    user_id: &str,
    content_entry_id: &str,
    content: &str,
    page_title: &str,
    existing_topics: &[String],
) -> ContentEntryIntent {
    ContentEntryIntent::RequestTopicGeneration {
        payload: ContentEntryTopicsMessage {
            user_id: user_id.to_string(),
            content_id: content_entry_id.to_string(),
            action: GENERATE_ACTION.to_string(),
            content: Some(content.to_string()),
            page_title: Some(page_title.to_string()),
            existing_topics: Some(existing_topics.join(",")),
            topics: None,
        },
    }
}

/// `bank` is the target bank as owned by the user, `stored` whatever entry already holds the
/// command's id and `same_source` the bank's entry of the same type and source url. A repeated
/// full page capture rewrites the stored entry, a repeated video transcript is returned
/// untouched.
pub fn decide_create(
    bank: Option<&ContentBank>,
    stored: Option<&ContentEntry>,
    same_source: Option<&ContentEntry>,
    existing_topics: &[String],
    command: CreateContentEntry,
) -> Decision {
    if !bank.is_some_and(|bank| bank.user_id == command.user_id) {
        return Decision::reject(DecideError::BankNotFound);
    }
    let content = normalize_content(command.content_type, &command.content);
    let word_count = count_words(command.content_type, &content);

    match (command.content_type, same_source) {
        (ContentType::VideoTranscript, Some(_)) => Decision::unchanged(),
        (ContentType::FullHtml, Some(existing)) => {
            let request = topic_generation_request(
                &command.user_id,
                &existing.id,
                &content,
                &command.page_title,
                existing_topics,
            );
            let event = ContentEntryEvent::ContentEntryUpdatedV1(ContentEntryUpdatedV1 {
                content_entry_id: existing.id.clone(),
                content,
                page_title: command.page_title,
                word_count,
                updated_at: command.created_at,
            });
            Decision::Accepted {
                events: vec![event.clone()],
                intents: vec![
                    ContentEntryIntent::PublishContentEntryEvent { event },
                    request,
                ],
            }
        }
        _ if stored.is_some() => Decision::reject(DecideError::IdTaken),
        _ => {
            let request = topic_generation_request(
                &command.user_id,
                &command.content_entry_id,
                &content,
                &command.page_title,
                existing_topics,
            );
            let is_video = command.content_type == ContentType::VideoTranscript;
            let event = ContentEntryEvent::ContentEntryCreatedV1(ContentEntryCreatedV1 {
                content_entry_id: command.content_entry_id,
                user_id: command.user_id,
                content_bank_id: command.content_bank_id,
                content_type: command.content_type,
                content,
                source_url: command.source_url,
                page_title: command.page_title,
                word_count,
                video_duration: command.video_duration.filter(|_| is_video),
                youtube_video_id: command.youtube_video_id.filter(|_| is_video),
                status: ContentEntryStatus::Pending,
                topic_ids: Vec::new(),
                created_at: command.created_at,
            });
            Decision::Accepted {
                events: vec![event.clone()],
                intents: vec![
                    ContentEntryIntent::PublishContentEntryEvent { event },
                    request,
                ],
            }
        }
    }
}

#[cfg(test)]
mod content_entry_create_decide_tests {
    use super::*;
    use crate::tests::fixtures::banks::ContentBankBuilder;
    use crate::tests::fixtures::entries::{ContentEntryBuilder, CreateContentEntryBuilder};
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (ContentBank, CreateContentEntry) {
        (
            ContentBankBuilder::new().build(),
            CreateContentEntryBuilder::new().build(),
        )
    }

    #[rstest]
    fn it_should_create_a_pending_entry_and_request_topics(
        before_each: (ContentBank, CreateContentEntry),
    ) {
        let (bank, command) = before_each;
        let topics = vec!["Traits".to_string(), "Borrowing".to_string()];
        match decide_create(Some(&bank), None, None, &topics, command.clone()) {
            Decision::Accepted { events, intents } => {
                match &events[..] {
                    [ContentEntryEvent::ContentEntryCreatedV1(e)] => {
                        assert_eq!(e.content_entry_id, command.content_entry_id);
                        assert_eq!(e.status, ContentEntryStatus::Pending);
                        assert_eq!(e.word_count, Some(5));
                    }
                    other => panic!("unexpected events: {other:?}"),
                }
                match &intents[1] {
                    ContentEntryIntent::RequestTopicGeneration { payload } => {
                        assert_eq!(payload.action, "GENERATE");
                        assert_eq!(payload.content_id, command.content_entry_id);
                        assert_eq!(payload.existing_topics.as_deref(), Some("Traits,Borrowing"));
                        assert_eq!(payload.topics, None);
                    }
                    other => panic!("unexpected intent: {other:?}"),
                }
            }
            Decision::Rejected { reason } => panic!("unexpected rejection: {reason}"),
        }
    }

    #[rstest]
    fn it_should_reject_a_bank_of_another_user(before_each: (ContentBank, CreateContentEntry)) {
        let (_, command) = before_each;
        let foreign = ContentBankBuilder::new().user_id("someone-else").build();
        assert!(matches!(
            decide_create(Some(&foreign), None, None, &[], command.clone()),
            Decision::Rejected {
                reason: DecideError::BankNotFound
            }
        ));
        assert!(matches!(
            decide_create(None, None, None, &[], command),
            Decision::Rejected {
                reason: DecideError::BankNotFound
            }
        ));
    }

    #[rstest]
    fn it_should_rewrite_a_full_page_captured_twice(before_each: (ContentBank, CreateContentEntry)) {
        let (bank, command) = before_each;
        let existing = ContentEntryBuilder::new()
            .id("entry-existing")
            .content_type(ContentType::FullHtml)
            .build();
        let command = CreateContentEntry {
            content_type: ContentType::FullHtml,
            content: "  <h1>Fresh</h1> page body \n".into(),
            ..command
        };
        match decide_create(Some(&bank), None, Some(&existing), &[], command) {
            Decision::Accepted { events, .. } => match &events[..] {
                [ContentEntryEvent::ContentEntryUpdatedV1(e)] => {
                    assert_eq!(e.content_entry_id, "entry-existing");
                    assert_eq!(e.content, "<h1>Fresh</h1> page body");
                    assert_eq!(e.word_count, Some(3));
                }
                other => panic!("unexpected events: {other:?}"),
            },
            Decision::Rejected { reason } => panic!("unexpected rejection: {reason}"),
        }
    }

    #[rstest]
    fn it_should_keep_a_video_transcript_captured_twice(
        before_each: (ContentBank, CreateContentEntry),
    ) {
        let (bank, command) = before_each;
        let existing = ContentEntryBuilder::new()
            .content_type(ContentType::VideoTranscript)
            .build();
        let command = CreateContentEntry {
            content_type: ContentType::VideoTranscript,
            ..command
        };
        match decide_create(Some(&bank), None, Some(&existing), &[], command) {
            Decision::Accepted { events, intents } => {
                assert!(events.is_empty());
                assert!(intents.is_empty());
            }
            Decision::Rejected { reason } => panic!("unexpected rejection: {reason}"),
        }
    }

    #[rstest]
    fn it_should_not_count_words_of_a_transcript(before_each: (ContentBank, CreateContentEntry)) {
        let (bank, command) = before_each;
        let command = CreateContentEntry {
            content_type: ContentType::VideoTranscript,
            video_duration: Some(600),
            youtube_video_id: Some("abc123".into()),
            ..command
        };
        match decide_create(Some(&bank), None, None, &[], command) {
            Decision::Accepted { events, .. } => match &events[..] {
                [ContentEntryEvent::ContentEntryCreatedV1(e)] => {
                    assert_eq!(e.word_count, None);
                    assert_eq!(e.video_duration, Some(600));
                    assert_eq!(e.youtube_video_id.as_deref(), Some("abc123"));
                }
                other => panic!("unexpected events: {other:?}"),
            },
            Decision::Rejected { reason } => panic!("unexpected rejection: {reason}"),
        }
    }

    #[rstest]
    fn it_should_reject_an_id_already_in_use(before_each: (ContentBank, CreateContentEntry)) {
        let (bank, command) = before_each;
        let stored = ContentEntryBuilder::new().user_id("someone-else").build();
        assert!(matches!(
            decide_create(Some(&bank), Some(&stored), None, &[], command),
            Decision::Rejected {
                reason: DecideError::IdTaken
            }
        ));
    }
}
