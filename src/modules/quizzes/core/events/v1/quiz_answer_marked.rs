use crate::modules::quizzes::core::questions::QuizQuestionResponse;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct QuizAnswerMarkedV1 {
    pub quiz_id: String,
    pub response: QuizQuestionResponse,
    pub all_questions_marked: bool,
    pub marked_at: i64,
}
