//! Candidate-side interview flow.
//!
//! [`TurnOrchestrator`] walks one interview against the agent API: intro, first question,
//! then alternating answer recordings and bot replies until the agent is done or the
//! candidate ends the session. [`VoiceActivityMonitor`] decides when an answer is over.
//! Devices and playback sit behind the traits in [`media`], so the same flow runs in a
//! browser shell, on a desktop, or against mocks.

pub mod api;
pub mod config;
pub mod error;
pub mod media;
pub mod orchestrator;
pub mod recording;
pub mod vad;

pub use api::{AgentApi, HttpAgentApi};
pub use config::ClientConfig;
pub use error::ClientError;
pub use media::{AudioCapture, AudioPlayer, Microphone};
pub use orchestrator::{
    InterviewControl, InterviewOutcome, InterviewTurnState, ReportView, SessionEnd,
    TurnOrchestrator,
};
pub use recording::{EncodedAudio, Recording, RecordingSession};
pub use vad::{LoudnessTracker, StopReason, VoiceActivityConfig, VoiceActivityMonitor, rms};
