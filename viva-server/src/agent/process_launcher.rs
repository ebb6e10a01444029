use crate::agent::{AgentError, AgentHandle, AgentLauncher, NoopLauncher};
use crate::config::AgentConfig;
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::{Child, Command};
use tracing::info;
use viva_core::{ParticipantId, RoomId};

/// Starts the agent as a child process that dials back into the signaling channel.
///
/// The child receives `VIVA_ROOM_ID`, `VIVA_PARTICIPANT_ID` and `VIVA_SIGNALING_URL`.
pub struct ProcessLauncher {
    command: String,
    args: Vec<String>,
    signaling_url: String,
}

impl ProcessLauncher {
    pub fn new(
        command: impl Into<String>,
        args: Vec<String>,
        signaling_url: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            args,
            signaling_url: signaling_url.into(),
        }
    }
}

struct ProcessHandle {
    participant: ParticipantId,
    child: Child,
}

#[async_trait]
impl AgentLauncher for ProcessLauncher {
    async fn start(&self, room: &RoomId) -> Result<Box<dyn AgentHandle>, AgentError> {
        let participant = ParticipantId::agent();

        let child = Command::new(&self.command)
            .args(&self.args)
            .env("VIVA_ROOM_ID", room.as_str())
            .env("VIVA_PARTICIPANT_ID", participant.as_str())
            .env("VIVA_SIGNALING_URL", &self.signaling_url)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| AgentError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        info!(
            pid = child.id(),
            "Agent {} spawned for room '{}'", participant, room
        );

        Ok(Box::new(ProcessHandle { participant, child }))
    }
}

#[async_trait]
impl AgentHandle for ProcessHandle {
    fn participant_id(&self) -> &ParticipantId {
        &self.participant
    }

    async fn stop(mut self: Box<Self>) -> Result<(), AgentError> {
        if let Ok(Some(status)) = self.child.try_wait() {
            info!("Agent {} already exited with {}", self.participant, status);
            return Ok(());
        }

        self.child.kill().await.map_err(AgentError::Stop)?;
        info!("Agent {} process killed", self.participant);
        Ok(())
    }
}

/// Picks the launcher described by the `[agent]` config section.
pub fn launcher_for(config: &AgentConfig) -> Arc<dyn AgentLauncher> {
    match &config.command {
        Some(command) => Arc::new(ProcessLauncher::new(
            command.clone(),
            config.args.clone(),
            config.signaling_url.clone(),
        )),
        None => Arc::new(NoopLauncher),
    }
}
