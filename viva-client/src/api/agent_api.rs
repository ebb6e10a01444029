use crate::error::ClientError;
use crate::recording::EncodedAudio;
use async_trait::async_trait;
use viva_core::{AudioReply, ProcessAudioReply, ReportResponse, RoomId};

/// The remote interview agent, reachable independently of room membership.
#[async_trait]
pub trait AgentApi: Send + Sync {
    async fn start_interview(
        &self,
        room: &RoomId,
        candidate_name: &str,
    ) -> Result<AudioReply, ClientError>;

    async fn next_question(&self, room: &RoomId) -> Result<AudioReply, ClientError>;

    async fn process_audio(
        &self,
        room: &RoomId,
        audio: &EncodedAudio,
    ) -> Result<ProcessAudioReply, ClientError>;

    async fn report(&self, room: &RoomId) -> Result<ReportResponse, ClientError>;

    /// Turns an audio reference from a reply into something the player can open.
    fn resolve_audio(&self, reference: &str) -> String {
        reference.to_owned()
    }
}
