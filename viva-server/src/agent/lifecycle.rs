use crate::agent::{AgentHandle, AgentLauncher};
use std::sync::Arc;
use tracing::{debug, error, info};
use viva_core::RoomId;

/// Which room, if any, currently owns the single automated agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Active(RoomId),
}

/// Guarantees that at most one agent runs across all rooms.
///
/// The first room a human joins claims the agent; humans joining other rooms meanwhile get
/// none until the claim is released. This is a single-tenancy policy, not an accident.
pub struct AgentLifecycle {
    state: LifecycleState,
    handle: Option<Box<dyn AgentHandle>>,
    launcher: Arc<dyn AgentLauncher>,
}

impl AgentLifecycle {
    pub fn new(launcher: Arc<dyn AgentLauncher>) -> Self {
        Self {
            state: LifecycleState::Idle,
            handle: None,
            launcher,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn active_room(&self) -> Option<&RoomId> {
        match &self.state {
            LifecycleState::Active(room) => Some(room),
            LifecycleState::Idle => None,
        }
    }

    /// Claims the agent for `room` and launches it. Returns whether this call made the claim.
    ///
    /// A failed launch still holds the claim until the room's human leaves.
    pub async fn try_start(&mut self, room: &RoomId) -> bool {
        match &self.state {
            LifecycleState::Active(active) if active == room => {
                debug!("Agent already active for room '{}'", room);
                return false;
            }
            LifecycleState::Active(active) => {
                info!(
                    "Agent busy in room '{}', room '{}' stays without one",
                    active, room
                );
                return false;
            }
            LifecycleState::Idle => {}
        }

        self.state = LifecycleState::Active(room.clone());
        info!("Starting agent for room '{}'", room);

        match self.launcher.start(room).await {
            Ok(handle) => {
                info!("Agent {} launched for room '{}'", handle.participant_id(), room);
                self.handle = Some(handle);
            }
            Err(e) => error!("Failed to start agent for room '{}': {}", room, e),
        }

        true
    }

    /// Stops the agent if one is claimed. Returns the room it was serving.
    pub async fn stop(&mut self) -> Option<RoomId> {
        let LifecycleState::Active(room) =
            std::mem::replace(&mut self.state, LifecycleState::Idle)
        else {
            return None;
        };

        if let Some(handle) = self.handle.take() {
            let participant = handle.participant_id().clone();
            match handle.stop().await {
                Ok(()) => info!("Agent {} stopped for room '{}'", participant, room),
                Err(e) => error!("Failed to stop agent {}: {}", participant, e),
            }
        }

        Some(room)
    }

    pub async fn on_human_joined(&mut self, room: &RoomId) {
        self.try_start(room).await;
    }

    pub async fn on_human_left(&mut self, room: &RoomId) {
        if self.active_room() == Some(room) {
            info!("Candidate left room '{}', stopping agent", room);
            self.stop().await;
        }
    }

    pub async fn shutdown(&mut self) {
        if let Some(room) = self.stop().await {
            info!("Agent for room '{}' stopped on shutdown", room);
        }
    }
}
