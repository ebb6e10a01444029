use crate::room::ConnectionId;
use viva_core::{ParticipantId, RoomId, ServerMessage};

/// Effect produced by handling one inbound frame or disconnect.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomAction {
    /// Push a frame to a single connection.
    Deliver {
        connection: ConnectionId,
        message: ServerMessage,
    },
    /// A human entered a room; the agent lifecycle may react.
    HumanJoined {
        room: RoomId,
        participant: ParticipantId,
    },
    /// A human left a room; the agent lifecycle may react.
    HumanLeft {
        room: RoomId,
        participant: ParticipantId,
    },
}
