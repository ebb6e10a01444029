//! Request and response bodies of the external agent API.

use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInterviewRequest {
    pub room_id: RoomId,
    pub candidate_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionRequest {
    pub room_id: RoomId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessAudioRequest {
    pub room_id: RoomId,
    /// Base64 of the encoded answer recording.
    pub audio_data: String,
}

/// Reply carrying a bot utterance to play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioReply {
    pub audio_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessAudioReply {
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub report_ready: bool,
}

impl ProcessAudioReply {
    /// The agent has nothing more to ask.
    pub fn is_done(&self) -> bool {
        self.report_ready || self.status.as_deref() == Some("done")
    }

    /// The agent could not hear an answer in the submitted segment.
    pub fn is_no_speech(&self) -> bool {
        self.status.as_deref() == Some("no_speech")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InProgressStatus {
    #[serde(rename = "in_progress")]
    InProgress,
}

/// `get-report` answer: either an explicit in-progress marker or the finished report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportResponse {
    InProgress {
        status: InProgressStatus,
        #[serde(default)]
        message: Option<String>,
    },
    Ready(InterviewReport),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewReport {
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub candidate_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub responses: Vec<AnswerRecord>,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub decision: String,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub answered_questions: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub ideal_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_answer: Option<String>,
}
