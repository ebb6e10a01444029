use crate::room::ConnectionId;
use async_trait::async_trait;
use viva_core::ServerMessage;

/// Outbound side of the signaling channel, as seen by the room hub.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Push a frame to one connection. Frames for closed connections are dropped.
    async fn send(&self, connection: ConnectionId, message: ServerMessage);
}
