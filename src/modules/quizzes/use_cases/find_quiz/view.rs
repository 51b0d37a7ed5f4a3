use crate::modules::quizzes::core::questions::QuizQuestion;
use crate::modules::quizzes::use_cases::list_quizzes_by_user::projection::{QuizRow, QuizView};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOptionView {
    pub option_id: i64,
    pub option_text: String,
}

/// The question to answer next. Correctness stays hidden until it is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentQuestionView {
    pub question_id: i64,
    pub question: String,
    pub question_type: String,
    pub content_entry_type: String,
    pub options: Vec<QuestionOptionView>,
}

impl From<&QuizQuestion> for CurrentQuestionView {
    fn from(question: &QuizQuestion) -> Self {
        Self {
            question_id: question.question_id,
            question: question.question.clone(),
            question_type: question.question_type.clone(),
            content_entry_type: question.content_entry_type.clone(),
            options: question
                .options
                .iter()
                .map(|option| QuestionOptionView {
                    option_id: option.option_id,
                    option_text: option.option_text.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizDetailView {
    #[serde(flatten)]
    pub quiz: QuizView,
    pub current_question: Option<CurrentQuestionView>,
}

impl QuizDetailView {
    pub fn from_row(row: QuizRow, now: i64) -> Self {
        let current_question = row
            .questions
            .get(row.questions_completed.max(0) as usize)
            .map(CurrentQuestionView::from);
        Self {
            quiz: QuizView::from_row(row, now),
            current_question,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResponseView {
    pub question_id: i64,
    pub question: String,
    pub is_correct: bool,
    pub answer: String,
    pub correct_answer: String,
    pub explanation: String,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSummaryView {
    pub quiz_id: String,
    pub bank_name: String,
    pub topics: Vec<String>,
    pub questions_count: i32,
    pub questions_completed: i32,
    pub correct_answers_count: i32,
}
