use crate::modules::quizzes::core::decision::{DecideError, Decision};
use crate::modules::quizzes::core::events::QuizEvent;
use crate::modules::quizzes::core::events::v1::quiz_answer_marked::QuizAnswerMarkedV1;
use crate::modules::quizzes::core::questions::QuizQuestionResponse;
use crate::modules::quizzes::core::state::QuizState;
use crate::modules::quizzes::use_cases::mark_quiz_answer::command::MarkQuizAnswer;

/// Answers the current question, `questions[questions_completed]`.
pub fn decide_mark_answer(state: &QuizState, command: MarkQuizAnswer) -> Decision {
    let quiz = match state {
        QuizState::None => return Decision::reject(DecideError::NotFound),
        QuizState::Deleted { .. } => return Decision::reject(DecideError::Deleted),
        QuizState::Active(quiz) => quiz,
    };
    let Some(question) = quiz.current_question() else {
        return Decision::reject(DecideError::Completed);
    };
    let Some(selected) = question
        .options
        .iter()
        .find(|option| option.option_id == command.option_id)
    else {
        return Decision::reject(DecideError::InvalidOption);
    };
    let Some(correct) = question.correct_option() else {
        return Decision::reject(DecideError::MisconfiguredQuestion);
    };

    Decision::record(QuizEvent::QuizAnswerMarkedV1(QuizAnswerMarkedV1 {
        quiz_id: quiz.quiz_id.clone(),
        response: QuizQuestionResponse {
            question_id: question.question_id,
            option_id: selected.option_id,
            is_correct: selected.is_correct,
            correct_answer: correct.option_text.clone(),
            answered_at: command.marked_at,
        },
        all_questions_marked: quiz.questions_completed + 1 >= quiz.questions_count(),
        marked_at: command.marked_at,
    }))
}
