pub mod v1 {
    pub mod quiz_answer_marked;
    pub mod quiz_created;
    pub mod quiz_deleted;
    pub mod quiz_questions_added;
    pub mod quiz_status_updated;
}

use v1::quiz_answer_marked::QuizAnswerMarkedV1;
use v1::quiz_created::QuizCreatedV1;
use v1::quiz_deleted::QuizDeletedV1;
use v1::quiz_questions_added::QuizQuestionsAddedV1;
use v1::quiz_status_updated::QuizStatusUpdatedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum QuizEvent {
    QuizCreatedV1(QuizCreatedV1),
    QuizQuestionsAddedV1(QuizQuestionsAddedV1),
    QuizStatusUpdatedV1(QuizStatusUpdatedV1),
    QuizAnswerMarkedV1(QuizAnswerMarkedV1),
    QuizDeletedV1(QuizDeletedV1),
}

impl QuizEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            QuizEvent::QuizCreatedV1(_) => "QuizCreated",
            QuizEvent::QuizQuestionsAddedV1(_) => "QuizQuestionsAdded",
            QuizEvent::QuizStatusUpdatedV1(_) => "QuizStatusUpdated",
            QuizEvent::QuizAnswerMarkedV1(_) => "QuizAnswerMarked",
            QuizEvent::QuizDeletedV1(_) => "QuizDeleted",
        }
    }

    pub fn quiz_id(&self) -> &str {
        match self {
            QuizEvent::QuizCreatedV1(e) => &e.quiz_id,
            QuizEvent::QuizQuestionsAddedV1(e) => &e.quiz_id,
            QuizEvent::QuizStatusUpdatedV1(e) => &e.quiz_id,
            QuizEvent::QuizAnswerMarkedV1(e) => &e.quiz_id,
            QuizEvent::QuizDeletedV1(e) => &e.quiz_id,
        }
    }

    pub fn occurred_at(&self) -> i64 {
        match self {
            QuizEvent::QuizCreatedV1(e) => e.created_at,
            QuizEvent::QuizQuestionsAddedV1(e) => e.updated_at,
            QuizEvent::QuizStatusUpdatedV1(e) => e.updated_at,
            QuizEvent::QuizAnswerMarkedV1(e) => e.marked_at,
            QuizEvent::QuizDeletedV1(e) => e.deleted_at,
        }
    }
}
