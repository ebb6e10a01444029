use crate::room::ConnectionId;
use tokio::sync::oneshot;
use viva_core::{ClientMessage, ParticipantId, RoomId};

/// Commands consumed by the room hub event loop.
#[derive(Debug)]
pub enum RoomCommand {
    /// A parsed frame arrived on a connection.
    Signal {
        connection: ConnectionId,
        message: ClientMessage,
    },

    /// The connection is gone; its membership is released.
    Disconnect { connection: ConnectionId },

    /// Snapshot of a room's current participants.
    Members {
        room: RoomId,
        reply: oneshot::Sender<Vec<ParticipantId>>,
    },

    /// Room the agent is currently claimed for.
    ActiveAgentRoom {
        reply: oneshot::Sender<Option<RoomId>>,
    },

    /// Stop the agent and end the event loop.
    Shutdown { done: oneshot::Sender<()> },
}
