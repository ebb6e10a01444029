use crate::agent::AgentLifecycle;
use crate::room::{ConnectionId, RoomAction, RoomCommand, RoomRegistry, dispatch, disconnect};
use crate::signaling::SignalingOutput;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};
use viva_core::{ClientMessage, ParticipantId, RoomId};

const COMMAND_QUEUE_CAPACITY: usize = 256;

#[derive(Debug, Error)]
#[error("room hub is no longer running")]
pub struct HubClosed;

/// The single event loop that owns room membership and the agent lifecycle.
pub struct RoomHub {
    registry: RoomRegistry,
    lifecycle: AgentLifecycle,
    command_rx: mpsc::Receiver<RoomCommand>,
    signaling: Arc<dyn SignalingOutput>,
}

impl RoomHub {
    pub fn new(
        command_rx: mpsc::Receiver<RoomCommand>,
        signaling: Arc<dyn SignalingOutput>,
        lifecycle: AgentLifecycle,
    ) -> Self {
        Self {
            registry: RoomRegistry::new(),
            lifecycle,
            command_rx,
            signaling,
        }
    }

    pub async fn run(mut self) {
        info!("Room hub event loop started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                RoomCommand::Signal {
                    connection,
                    message,
                } => {
                    let actions = dispatch(&mut self.registry, connection, message);
                    self.apply(actions).await;
                }

                RoomCommand::Disconnect { connection } => {
                    let actions = disconnect(&mut self.registry, connection);
                    self.apply(actions).await;
                }

                RoomCommand::Members { room, reply } => {
                    let _ = reply.send(self.registry.members(&room));
                }

                RoomCommand::ActiveAgentRoom { reply } => {
                    let _ = reply.send(self.lifecycle.active_room().cloned());
                }

                RoomCommand::Shutdown { done } => {
                    info!("Shutdown requested");
                    self.lifecycle.shutdown().await;
                    let _ = done.send(());
                    break;
                }
            }
        }

        // Covers the queue closing without an explicit shutdown.
        self.lifecycle.shutdown().await;
        info!("Room hub event loop finished");
    }

    async fn apply(&mut self, actions: Vec<RoomAction>) {
        for action in actions {
            match action {
                RoomAction::Deliver {
                    connection,
                    message,
                } => self.signaling.send(connection, message).await,
                RoomAction::HumanJoined { room, .. } => {
                    self.lifecycle.on_human_joined(&room).await;
                }
                RoomAction::HumanLeft { room, .. } => {
                    self.lifecycle.on_human_left(&room).await;
                }
            }
        }
    }
}

/// Cloneable sender side of the hub's command queue.
#[derive(Clone)]
pub struct RoomHubHandle {
    tx: mpsc::Sender<RoomCommand>,
}

impl RoomHubHandle {
    /// Creates the command queue; the receiver goes to [`RoomHub::new`].
    pub fn channel() -> (Self, mpsc::Receiver<RoomCommand>) {
        let (tx, rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
        (Self { tx }, rx)
    }

    pub async fn signal(
        &self,
        connection: ConnectionId,
        message: ClientMessage,
    ) -> Result<(), HubClosed> {
        self.tx
            .send(RoomCommand::Signal {
                connection,
                message,
            })
            .await
            .map_err(|_| HubClosed)
    }

    pub async fn disconnect(&self, connection: ConnectionId) {
        if self
            .tx
            .send(RoomCommand::Disconnect { connection })
            .await
            .is_err()
        {
            warn!("Room hub gone before disconnect of {}", connection);
        }
    }

    /// Current participants of `room`; empty if the room does not exist.
    pub async fn members(&self, room: RoomId) -> Result<Vec<ParticipantId>, HubClosed> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(RoomCommand::Members { room, reply })
            .await
            .map_err(|_| HubClosed)?;
        rx.await.map_err(|_| HubClosed)
    }

    pub async fn active_agent_room(&self) -> Result<Option<RoomId>, HubClosed> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(RoomCommand::ActiveAgentRoom { reply })
            .await
            .map_err(|_| HubClosed)?;
        rx.await.map_err(|_| HubClosed)
    }

    /// Stops the agent and the hub. Resolves once the agent is gone.
    pub async fn shutdown(&self) {
        let (done, rx) = oneshot::channel();
        if self.tx.send(RoomCommand::Shutdown { done }).await.is_ok() {
            let _ = rx.await;
        }
    }
}
