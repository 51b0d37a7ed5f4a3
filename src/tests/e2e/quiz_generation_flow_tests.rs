use crate::modules::content_banks::use_cases::create_content_bank::command::CreateContentBank;
use crate::modules::content_banks::use_cases::create_content_bank::handler::CreateContentBankHandler;
use crate::modules::content_entries::use_cases::create_content_entry::handler::CreateContentEntryHandler;
use crate::modules::quizzes::core::status::QuizStatus;
use crate::modules::quizzes::use_cases::apply_generated_questions::handler::QUIZ_GENERATION_CHANNEL;
use crate::modules::quizzes::use_cases::create_quiz::handler::QUIZ_IN_PROGRESS;
use crate::modules::quizzes::use_cases::delete_quiz::handler::DeleteQuizHandler;
use crate::modules::quizzes::use_cases::find_quiz::handler::FindQuizHandler;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::handler::ListQuizzesByUserHandler;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_bus::InboundMessage;
use crate::shared::infrastructure::pub_sub::in_memory::InMemoryPubSub;
use crate::shared::infrastructure::pub_sub::user_channel;
use crate::shell::state::AppState;
use crate::tests::fixtures::entries::CreateContentEntryBuilder;
use serde_json::json;
use std::sync::Arc;

const USER: &str = "user-fixed-0001";
const BANK: &str = "bank-fixed-0001";
const ENTRY: &str = "entry-fixed-0001";

async fn seeded_state(pub_sub: Arc<InMemoryPubSub>) -> AppState {
    let state = AppState::in_memory(pub_sub);
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
}

fn chunk(quiz_id: &str, index: i32, question: &str) -> InboundMessage {
    let payload = json!({
        "quizId": quiz_id,
        "userId": USER,
        "bankId": BANK,
        "totalContentEntries": 1,
        "currentContentEntryIndex": 0,
        "questionsGeneratedSoFar": index + 1,
        "totalChunks": 2,
        "currentChunkIndex": index,
        "contentEntry": {
            "id": ENTRY,
            "pageTitle": "What is Ownership?",
            "wordCountAnalyzed": 60,
            "questions": [{
                "question": question,
                "type": "multiple-choice",
                "options": [
                    { "optionText": "Yes", "optionExplanation": "Right", "isCorrect": true },
                    { "optionText": "No", "optionExplanation": "Wrong", "isCorrect": false }
                ]
            }]
        }
    });
    InboundMessage {
        topic: QUIZ_GENERATION_CHANNEL.into(),
        key: Some(quiz_id.into()),
        payload: payload.to_string(),
    }
}

#[tokio::test]
async fn generates_a_quiz_across_chunks() {
    let pub_sub = Arc::new(InMemoryPubSub::new());
    let state = seeded_state(pub_sub.clone()).await;
    let listener = state.quiz_generation_listener();
    let projector = state.projector();
    let finder = FindQuizHandler::new(state.projections.clone());

    state.create_quiz().handle(USER, BANK, "quiz-1").await.unwrap();

    listener
        .handle(chunk("quiz-1", 0, "Is a String moved on assignment?"))
        .await
        .unwrap();
    projector.run_once(&*state.event_store, 100).await.unwrap();
    let partial = finder.find_one(USER, "quiz-1").await.unwrap();
    assert_eq!(partial.quiz.status, QuizStatus::InProgress);
    assert_eq!(partial.quiz.questions_count, 1);

    let blocked = state.create_quiz().handle(USER, BANK, "quiz-2").await;
    assert!(matches!(blocked, Err(ApplicationError::Conflict(message)) if message == QUIZ_IN_PROGRESS));

    listener
        .handle(chunk("quiz-1", 1, "Does a reference own its value?"))
        .await
        .unwrap();
    projector.run_once(&*state.event_store, 100).await.unwrap();
    let complete = finder.find_one(USER, "quiz-1").await.unwrap();
    assert_eq!(complete.quiz.status, QuizStatus::Ready);
    assert_eq!(complete.quiz.questions_count, 2);

    let progress = pub_sub
        .messages_on(&user_channel(QUIZ_GENERATION_CHANNEL, USER))
        .await;
    assert_eq!(progress.len(), 2);
    assert!(progress[0].get("completed").is_none());
    assert_eq!(progress[0]["progress"]["contentEntry"]["id"], ENTRY);
    assert_eq!(progress[1]["completed"]["quizId"], "quiz-1");
}

#[tokio::test]
async fn reuses_generated_questions_for_the_next_quiz() {
    let state = seeded_state(Arc::new(InMemoryPubSub::new())).await;
    let listener = state.quiz_generation_listener();
    let projector = state.projector();

    state.create_quiz().handle(USER, BANK, "quiz-1").await.unwrap();
    listener
        .handle(chunk("quiz-1", 0, "Is a String moved on assignment?"))
        .await
        .unwrap();
    listener
        .handle(chunk("quiz-1", 1, "Does a reference own its value?"))
        .await
        .unwrap();
    projector.run_once(&*state.event_store, 100).await.unwrap();

    state.create_quiz().handle(USER, BANK, "quiz-2").await.unwrap();
    projector.run_once(&*state.event_store, 100).await.unwrap();

    let second = FindQuizHandler::new(state.projections.clone())
        .find_one(USER, "quiz-2")
        .await
        .unwrap();
    assert_eq!(second.quiz.status, QuizStatus::Ready);
    assert_eq!(second.quiz.questions_count, 2);

    let rows = state.outbox.rows.lock().await;
    let requests: Vec<_> = rows
        .iter()
        .filter(|row| row.stream_id == "Quiz-quiz-2" && row.topic == "create-quiz")
        .collect();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].payload["entriesSkipped"], 1);
    assert_eq!(requests[0].payload["contentEntries"], json!([]));
}

#[tokio::test]
async fn hides_a_deleted_quiz() {
    let state = seeded_state(Arc::new(InMemoryPubSub::new())).await;
    let projector = state.projector();
    state.create_quiz().handle(USER, BANK, "quiz-1").await.unwrap();

    let deleter = DeleteQuizHandler::new(state.event_store.clone(), state.outbox.clone());
    deleter.handle(USER, "quiz-1").await.unwrap();
    deleter.handle(USER, "quiz-1").await.unwrap();
    projector.run_once(&*state.event_store, 100).await.unwrap();

    let listed = ListQuizzesByUserHandler::new(state.projections.clone())
        .handle(USER, 0, 10)
        .await
        .unwrap();
    assert!(listed.is_empty());
    let found = FindQuizHandler::new(state.projections.clone())
        .find_one(USER, "quiz-1")
        .await;
    assert!(matches!(found, Err(ApplicationError::NotFound(_))));

    let late = state
        .quiz_generation_listener()
        .handle(chunk("quiz-1", 0, "Is a String moved on assignment?"))
        .await;
    assert!(late.is_err());
}
