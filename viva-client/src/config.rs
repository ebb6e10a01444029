use crate::vad::VoiceActivityConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the agent API, without the `/agent` path.
    pub api_base: String,
    pub voice: VoiceActivityConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000".to_owned(),
            voice: VoiceActivityConfig::default(),
        }
    }
}
