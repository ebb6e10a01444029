use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix carried by every automated agent identifier. Participants with it are
/// audio-only and never trigger the agent lifecycle.
pub const AGENT_PREFIX: &str = "bot-";

/// Connection-scoped participant identifier.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Random identifier for a human participant.
    pub fn human() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Random identifier marked as the automated agent.
    pub fn agent() -> Self {
        Self(format!("{AGENT_PREFIX}{}", Uuid::new_v4()))
    }

    pub fn is_agent(&self) -> bool {
        self.0.starts_with(AGENT_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
