mod loudness;
mod monitor;

pub use loudness::*;
pub use monitor::*;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Turn-ending policy for answer recordings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceActivityConfig {
    /// RMS level, on a 0..1 scale, above which a frame counts as speech.
    pub silence_threshold: f32,
    /// Quiet time after speech that ends the answer.
    pub silence_budget_ms: u64,
    /// Hard ceiling on one answer, speech or not.
    pub max_duration_ms: u64,
    pub frame_interval_ms: u64,
    /// Samples per analysed waveform window.
    pub window_size: usize,
    pub mime_type: String,
}

impl VoiceActivityConfig {
    pub fn silence_budget(&self) -> Duration {
        Duration::from_millis(self.silence_budget_ms)
    }

    pub fn max_duration(&self) -> Duration {
        Duration::from_millis(self.max_duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

impl Default for VoiceActivityConfig {
    fn default() -> Self {
        Self {
            silence_threshold: 0.02,
            silence_budget_ms: 3_000,
            max_duration_ms: 15_000,
            frame_interval_ms: 16,
            window_size: 2048,
            mime_type: "audio/wav".to_owned(),
        }
    }
}
