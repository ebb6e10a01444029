use crate::agent::AgentError;
use async_trait::async_trait;
use tracing::warn;
use viva_core::{ParticipantId, RoomId};

/// Brings an automated interviewer into a room.
///
/// How the agent reaches the room is up to the implementation; it must join as a
/// participant whose identifier carries the agent prefix.
#[async_trait]
pub trait AgentLauncher: Send + Sync {
    async fn start(&self, room: &RoomId) -> Result<Box<dyn AgentHandle>, AgentError>;
}

/// A running agent. Stopping it ends its room participation.
#[async_trait]
pub trait AgentHandle: Send {
    fn participant_id(&self) -> &ParticipantId;

    async fn stop(self: Box<Self>) -> Result<(), AgentError>;
}

/// Used when no agent command is configured: rooms simply stay without a counterpart.
pub struct NoopLauncher;

struct NoopHandle {
    participant: ParticipantId,
}

#[async_trait]
impl AgentLauncher for NoopLauncher {
    async fn start(&self, room: &RoomId) -> Result<Box<dyn AgentHandle>, AgentError> {
        warn!("No agent command configured, room '{}' gets no interviewer", room);
        Ok(Box::new(NoopHandle {
            participant: ParticipantId::agent(),
        }))
    }
}

#[async_trait]
impl AgentHandle for NoopHandle {
    fn participant_id(&self) -> &ParticipantId {
        &self.participant
    }

    async fn stop(self: Box<Self>) -> Result<(), AgentError> {
        Ok(())
    }
}
