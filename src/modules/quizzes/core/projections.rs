use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::status::QuizStatus;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::projection::QuizRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(QuizRow),
    Delete { quiz_id: String },
}

/// Translate one quiz event into read model mutations. `current` is the stored row, if any.
/// Events at or below the row's applied version were already folded in and produce nothing.
pub fn apply(
    stream_id: &str,
    version: i64,
    event: &QuizEvent,
    current: Option<&QuizRow>,
) -> Vec<Mutation> {
    if current.is_some_and(|row| row.last_applied_version >= version) {
        return Vec::new();
    }
    let stream_key = format!("{stream_id}:{version}");
    let touch = |mut row: QuizRow| {
        row.last_applied_version = version;
        row.last_event_id = Some(stream_key.clone());
        Mutation::Upsert(row)
    };

    match (event, current) {
        (QuizEvent::QuizCreatedV1(e), None) => vec![touch(QuizRow {
            quiz_id: e.quiz_id.clone(),
            user_id: e.user_id.clone(),
            content_bank_id: e.content_bank_id.clone(),
            bank_name: e.bank_name.clone(),
            status: e.status,
            topics: Vec::new(),
            questions: Vec::new(),
            responses: Vec::new(),
            questions_count: 0,
            questions_completed: 0,
            content_entries_count: 0,
            created_at: e.created_at,
            question_updated_at: None,
            completed_at: None,
            last_applied_version: 0,
            last_event_id: None,
        })],
        (QuizEvent::QuizQuestionsAddedV1(e), Some(row)) => {
            let mut row = row.clone();
            for topic in &e.topics {
                if !row.topics.contains(topic) {
                    row.topics.push(topic.clone());
                }
            }
            row.questions.extend(e.questions.iter().cloned());
            row.questions_count = row.questions.len() as i32;
            row.status = e.status;
            row.content_entries_count = e.content_entries_count;
            row.question_updated_at = Some(e.updated_at);
            vec![touch(row)]
        }
        (QuizEvent::QuizStatusUpdatedV1(e), Some(row)) => {
            let mut row = row.clone();
            row.status = e.status;
            vec![touch(row)]
        }
        (QuizEvent::QuizAnswerMarkedV1(e), Some(row)) => {
            let mut row = row.clone();
            row.responses.push(e.response.clone());
            row.questions_completed += 1;
            if e.all_questions_marked && row.status == QuizStatus::Ready {
                row.completed_at = Some(e.marked_at);
            }
            vec![touch(row)]
        }
        (QuizEvent::QuizDeletedV1(e), _) => vec![Mutation::Delete {
            quiz_id: e.quiz_id.clone(),
        }],
        _ => Vec::new(),
    }
}
