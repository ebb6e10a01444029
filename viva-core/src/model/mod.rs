mod agent_api;
mod participant;
mod room;
mod signaling;

pub use agent_api::{
    AnswerRecord, AudioReply, InProgressStatus, InterviewReport, NextQuestionRequest,
    ProcessAudioReply, ProcessAudioRequest, ReportResponse, StartInterviewRequest,
};
pub use participant::{AGENT_PREFIX, ParticipantId};
pub use room::RoomId;
pub use signaling::{ClientMessage, IceServerConfig, NegotiationKind, ServerMessage};
