use crate::modules::quizzes::core::decision::{DecideError, Decision};
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::events::v1::quiz_questions_added::QuizQuestionsAddedV1;
use crate::modules::quizzes::core::questions::{QuizQuestion, QuizQuestionOption};
use crate::modules::quizzes::core::state::QuizState;
use crate::modules::quizzes::use_cases::add_quiz_questions::command::AddQuizQuestions;
use std::collections::HashSet;

pub fn decide_add_questions(state: &QuizState, command: AddQuizQuestions) -> Decision {
    let quiz = match state {
        QuizState::None => return Decision::reject(DecideError::NotFound),
        QuizState::Deleted { .. } => return Decision::reject(DecideError::Deleted),
        QuizState::Active(quiz) => quiz,
    };

    let mut seen: HashSet<(i32, i32, &str)> =
        quiz.questions.iter().map(QuizQuestion::chunk_key).collect();
    let mut next_question_id = quiz.questions_count() as i64 + 1;
    let mut next_option_id = quiz.next_option_id();
    let mut questions = Vec::new();
    for candidate in &command.questions {
        if !seen.insert(candidate.chunk_key()) {
            continue;
        }
        let options = candidate
            .options
            .iter()
            .map(|option| {
                let option_id = next_option_id;
                next_option_id += 1;
                QuizQuestionOption {
                    option_id,
                    option_text: option.option_text.clone(),
                    option_explanation: option.option_explanation.clone(),
                    is_correct: option.is_correct,
                }
            })
            .collect();
        questions.push(QuizQuestion {
            question_id: next_question_id,
            question: candidate.question.clone(),
            question_type: candidate.question_type.clone(),
            content_entry_id: candidate.content_entry_id.clone(),
            content_entry_type: candidate.content_entry_type.clone(),
            content_entry_source_url: candidate.content_entry_source_url.clone(),
            chunk_index: candidate.chunk_index,
            question_index_in_chunk: candidate.question_index_in_chunk,
            options,
        });
        next_question_id += 1;
    }

    let mut topics: Vec<String> = Vec::new();
    for topic in &command.topics {
        if !quiz.topics.contains(topic) && !topics.contains(topic) {
            topics.push(topic.clone());
        }
    }

    let changed = !questions.is_empty()
        || !topics.is_empty()
        || quiz.status != command.status
        || quiz.content_entries_count != command.content_entries_count;
    if !changed {
        return Decision::unchanged();
    }
    Decision::record(QuizEvent::QuizQuestionsAddedV1(QuizQuestionsAddedV1 {
        quiz_id: quiz.quiz_id.clone(),
        topics,
        status: command.status,
        content_entries_count: command.content_entries_count,
        questions,
        updated_at: command.updated_at,
    }))
}
