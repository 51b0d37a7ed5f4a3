use serde::{Deserialize, Serialize};
use serde_json::{Value as Json, json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOption {
    pub option_text: String,
    #[serde(default)]
    pub option_explanation: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question: String,
    #[serde(rename = "type", default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub options: Vec<GeneratedOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContentEntry {
    pub id: String,
    #[serde(default)]
    pub page_title: String,
    #[serde(default)]
    pub word_count_analyzed: i32,
    #[serde(default)]
    pub questions: Vec<GeneratedQuestion>,
}

/// One chunk of generated questions, as sent by the generator on `quiz-generation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizGenerationMessage {
    pub quiz_id: String,
    pub user_id: String,
    pub bank_id: String,
    #[serde(default)]
    pub total_content_entries: i32,
    #[serde(default)]
    pub total_content_entries_skipped: i32,
    #[serde(default)]
    pub current_content_entry_index: i32,
    #[serde(default)]
    pub questions_generated_so_far: i32,
    #[serde(default)]
    pub content_entry: Option<GeneratedContentEntry>,
    pub total_chunks: i32,
    pub current_chunk_index: i32,
}

impl QuizGenerationMessage {
    /// Nothing more will arrive for this quiz after this message.
    pub fn is_last(&self) -> bool {
        self.total_chunks == 0 || self.is_final_chunk()
    }

    /// The chunk completes the announced count. An empty count never does.
    pub fn is_final_chunk(&self) -> bool {
        self.current_chunk_index + 1 == self.total_chunks
    }

    /// Message fanned out to the user's `quiz-generation` channel.
    pub fn progress_notification(&self) -> Json {
        let mut progress = json!({
            "quizId": self.quiz_id,
            "bankId": self.bank_id,
            "totalContentEntries": self.total_content_entries,
            "totalContentEntriesSkipped": self.total_content_entries_skipped,
            "currentContentEntryIndex": self.current_content_entry_index,
            "questionsGeneratedSoFar": self.questions_generated_so_far,
            "totalChunks": self.total_chunks,
            "currentChunkIndex": self.current_chunk_index,
        });
        if let Some(entry) = &self.content_entry {
            progress["contentEntry"] = json!({
                "id": entry.id,
                "name": entry.page_title,
                "wordCountAnalyzed": entry.word_count_analyzed,
            });
        }
        let mut notification = json!({ "progress": progress });
        if self.is_last() {
            notification["completed"] = json!({ "quizId": self.quiz_id });
        }
        notification
    }
}
