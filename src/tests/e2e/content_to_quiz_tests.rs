use crate::modules::content_banks::adapters::outbound::repository::ContentBankRepository;
use crate::modules::content_banks::use_cases::create_content_bank::command::CreateContentBank;
use crate::modules::content_banks::use_cases::create_content_bank::handler::CreateContentBankHandler;
use crate::modules::content_entries::adapters::outbound::intent_outbox::TOPIC_GENERATION_TOPIC;
use crate::modules::content_entries::adapters::outbound::repository::ContentEntryRepository;
use crate::modules::content_entries::use_cases::create_content_entry::handler::CreateContentEntryHandler;
use crate::modules::quizzes::adapters::outbound::intent_outbox::CREATE_QUIZ_TOPIC;
use crate::modules::quizzes::core::status::QuizStatus;
use crate::modules::quizzes::use_cases::find_quiz::handler::FindQuizHandler;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::handler::ListQuizzesByUserHandler;
use crate::modules::quizzes::use_cases::mark_quiz_answer::command::MarkQuizAnswer;
use crate::modules::quizzes::use_cases::mark_quiz_answer::handler::MarkQuizAnswerHandler;
use crate::shared::infrastructure::event_bus::in_memory::InMemoryEventBus;
use crate::shared::infrastructure::event_bus::{EventBus, InboundMessage};
use crate::shared::infrastructure::pub_sub::in_memory::InMemoryPubSub;
use crate::shared::infrastructure::pub_sub::user_channel;
use crate::shell::state::AppState;
use crate::tests::fixtures::entries::CreateContentEntryBuilder;
use std::sync::Arc;

const USER: &str = "user-fixed-0001";
const BANK: &str = "bank-fixed-0001";
const ENTRY: &str = "entry-fixed-0001";
const QUIZ: &str = "quiz-fixed-0001";

fn inbound(topic: &str, payload: String) -> InboundMessage {
    InboundMessage {
        topic: topic.into(),
        key: None,
        payload,
    }
}

fn generated_chunk() -> String {
    serde_json::json!({
        "quizId": QUIZ,
        "userId": USER,
        "bankId": BANK,
        "totalContentEntries": 1,
        "currentContentEntryIndex": 0,
        "questionsGeneratedSoFar": 2,
        "totalChunks": 1,
        "currentChunkIndex": 0,
        "contentEntry": {
            "id": ENTRY,
            "pageTitle": "What is Ownership?",
            "wordCountAnalyzed": 120,
            "questions": [
                {
                    "question": "Who owns a value?",
                    "type": "multiple-choice",
                    "options": [
                        { "optionText": "Exactly one variable", "optionExplanation": "Single owner", "isCorrect": true },
                        { "optionText": "Every reference", "optionExplanation": "Borrows do not own", "isCorrect": false }
                    ]
                },
                {
                    "question": "What happens when the owner goes out of scope?",
                    "type": "multiple-choice",
                    "options": [
                        { "optionText": "The value is dropped", "optionExplanation": "Drop runs", "isCorrect": true },
                        { "optionText": "Nothing", "optionExplanation": "It is freed", "isCorrect": false }
                    ]
                }
            ]
        }
    })
    .to_string()
}

#[tokio::test]
async fn captures_content_and_answers_a_generated_quiz() {
    let pub_sub = Arc::new(InMemoryPubSub::new());
    let state = AppState::in_memory(pub_sub.clone());

    CreateContentBankHandler::new(state.sources.banks.clone(), state.outbox.clone())
        .handle(CreateContentBank {
            content_bank_id: BANK.into(),
            user_id: USER.into(),
            name: "Rust Book".into(),
            created_at: 1_700_000_000_000,
        })
        .await
        .unwrap();
    CreateContentEntryHandler::new(
        state.sources.banks.clone(),
        state.sources.entries.clone(),
        state.sources.topics.clone(),
        state.outbox.clone(),
    )
    .handle(
        CreateContentEntryBuilder::new()
            .content_entry_id(ENTRY)
            .content_bank_id(BANK)
            .user_id(USER)
            .build(),
    )
    .await
    .unwrap();

    state
        .content_entry_topics_listener()
        .handle(inbound(
            TOPIC_GENERATION_TOPIC,
            serde_json::json!({
                "userId": USER,
                "contentId": ENTRY,
                "action": "SAVE",
                "topics": ["Ownership", "Borrowing"]
            })
            .to_string(),
        ))
        .await
        .unwrap();

    state.create_quiz().handle(USER, BANK, QUIZ).await.unwrap();
    state
        .quiz_generation_listener()
        .handle(inbound("quiz-generation", generated_chunk()))
        .await
        .unwrap();

    let projector = state.projector();
    projector.run_once(&*state.event_store, 100).await.unwrap();

    let listed = ListQuizzesByUserHandler::new(state.projections.clone())
        .handle(USER, 0, 10)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, QuizStatus::Ready);
    assert_eq!(listed[0].questions_count, 2);
    assert_eq!(listed[0].bank_name, "Rust Book");

    let finder = FindQuizHandler::new(state.projections.clone());
    let detail = finder.find_one(USER, QUIZ).await.unwrap();
    let current = detail.current_question.unwrap();
    assert_eq!(current.question, "Who owns a value?");
    assert_eq!(current.options.len(), 2);

    let marker = MarkQuizAnswerHandler::new(state.event_store.clone(), state.outbox.clone());
    let first = marker
        .handle(MarkQuizAnswer {
            quiz_id: QUIZ.into(),
            user_id: USER.into(),
            option_id: current.options[0].option_id,
            marked_at: 1_700_000_100_000,
        })
        .await
        .unwrap();
    assert!(first.success);
    assert!(!first.is_completed);
    assert_eq!(first.correct_option_id, Some(current.options[0].option_id));

    projector.run_once(&*state.event_store, 100).await.unwrap();
    let next = finder
        .find_one(USER, QUIZ)
        .await
        .unwrap()
        .current_question
        .unwrap();
    let last = marker
        .handle(MarkQuizAnswer {
            quiz_id: QUIZ.into(),
            user_id: USER.into(),
            option_id: next.options[1].option_id,
            marked_at: 1_700_000_200_000,
        })
        .await
        .unwrap();
    assert!(last.success);
    assert!(last.is_completed);

    projector.run_once(&*state.event_store, 100).await.unwrap();
    let summary = finder.find_summary(USER, QUIZ).await.unwrap();
    assert_eq!(summary.questions_completed, 2);
    assert_eq!(summary.correct_answers_count, 1);
    let mut topics = summary.topics.clone();
    topics.sort();
    assert_eq!(topics, vec!["Borrowing".to_string(), "Ownership".to_string()]);

    let responses = finder.find_responses(USER, QUIZ).await.unwrap();
    assert_eq!(responses.len(), 2);
    assert!(responses[0].is_correct);
    assert!(!responses[1].is_correct);
    assert_eq!(responses[1].correct_answer, "The value is dropped");
}

#[tokio::test]
async fn relays_generation_requests_to_the_event_bus() {
    let state = AppState::in_memory(Arc::new(InMemoryPubSub::new()));
    CreateContentBankHandler::new(state.sources.banks.clone(), state.outbox.clone())
        .handle(CreateContentBank {
            content_bank_id: BANK.into(),
            user_id: USER.into(),
            name: "Rust Book".into(),
            created_at: 1_700_000_000_000,
        })
        .await
        .unwrap();
    CreateContentEntryHandler::new(
        state.sources.banks.clone(),
        state.sources.entries.clone(),
        state.sources.topics.clone(),
        state.outbox.clone(),
    )
    .handle(
        CreateContentEntryBuilder::new()
            .content_entry_id(ENTRY)
            .content_bank_id(BANK)
            .user_id(USER)
            .build(),
    )
    .await
    .unwrap();
    state.create_quiz().handle(USER, BANK, QUIZ).await.unwrap();

    let event_bus = Arc::new(InMemoryEventBus::new());
    let relay = state.outbox_relay(event_bus.clone() as Arc<dyn EventBus>);
    let enqueued = state.outbox.rows.lock().await.len();
    let dispatched = relay.run_once(100).await.unwrap();
    assert_eq!(dispatched, enqueued);
    assert!(state.outbox.rows.lock().await.is_empty());
    assert_eq!(relay.run_once(100).await.unwrap(), 0);

    let topic_requests = event_bus.published_to(TOPIC_GENERATION_TOPIC).await;
    assert_eq!(topic_requests.len(), 1);
    assert_eq!(topic_requests[0].payload["action"], "GENERATE");
    assert_eq!(topic_requests[0].payload["contentId"], ENTRY);

    let generation_requests = event_bus.published_to(CREATE_QUIZ_TOPIC).await;
    assert_eq!(generation_requests.len(), 1);
    assert_eq!(generation_requests[0].key, format!("user-{USER}"));
    assert_eq!(generation_requests[0].payload["quizId"], QUIZ);
    assert_eq!(
        generation_requests[0].payload["contentEntries"][0]["id"],
        ENTRY
    );
}

#[tokio::test]
async fn onboards_a_verified_user_and_discards_failed_entries() {
    let pub_sub = Arc::new(InMemoryPubSub::new());
    let state = AppState::in_memory(pub_sub.clone());

    let verified = serde_json::json!({
        "data": {
            "event_id": "event-fixed-0001",
            "type": "auth.user.verified",
            "occurred_on": "2024-01-01 10:00:00",
            "attributes": { "aggregate_id": USER, "user_id": USER }
        }
    })
    .to_string();
    let listener = state.user_verified_listener();
    listener
        .handle(inbound("auth.user.verified", verified.clone()))
        .await
        .unwrap();
    listener
        .handle(inbound("auth.user.verified", verified))
        .await
        .unwrap();

    let banks = state.sources.banks.list_by_user(USER, None).await.unwrap();
    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0].name, "Default");

    CreateContentEntryHandler::new(
        state.sources.banks.clone(),
        state.sources.entries.clone(),
        state.sources.topics.clone(),
        state.outbox.clone(),
    )
    .handle(
        CreateContentEntryBuilder::new()
            .content_entry_id(ENTRY)
            .content_bank_id(banks[0].id.clone())
            .user_id(USER)
            .build(),
    )
    .await
    .unwrap();

    state
        .topics_failed_listener()
        .handle(inbound(
            "ai_content_entry.topics_failed",
            serde_json::json!({
                "data": {
                    "event_id": "event-fixed-0002",
                    "type": "ai_content_entry.topics_failed",
                    "attributes": {
                        "aggregate_id": ENTRY,
                        "user_id": USER,
                        "character_message": "I could not find any topics there"
                    }
                }
            })
            .to_string(),
        ))
        .await
        .unwrap();

    assert!(state.sources.entries.get(ENTRY).await.unwrap().is_none());
    let notices = pub_sub
        .messages_on(&user_channel("character.message.ephemeral", USER))
        .await;
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["characterMessage"], "I could not find any topics there");
}
