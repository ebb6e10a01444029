use crate::media::AudioCapture;
use crate::recording::{Recording, RecordingSession};
use crate::vad::{VoiceActivityConfig, rms};
use std::future::Future;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Why an answer recording ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Speech was followed by the full silence budget.
    Silence,
    /// The hard ceiling was reached.
    Deadline,
    /// The session was ended from outside.
    Manual,
}

/// Samples a live capture and ends the turn on silence, deadline or request.
#[derive(Debug, Clone)]
pub struct VoiceActivityMonitor {
    config: VoiceActivityConfig,
}

impl VoiceActivityMonitor {
    pub fn new(config: VoiceActivityConfig) -> Self {
        Self { config }
    }

    /// Records one answer from `capture`.
    ///
    /// Runs until the candidate has been quiet for the silence budget after speaking, the
    /// maximum duration elapses, or `manual_stop` resolves. The capture is stopped before
    /// this returns, whatever the reason.
    pub async fn record<F>(&self, capture: &mut dyn AudioCapture, manual_stop: F) -> Recording
    where
        F: Future<Output = ()>,
    {
        let mut session = RecordingSession::start(&self.config);
        let mut window = vec![128u8; self.config.window_size];

        let mut ticker = tokio::time::interval(self.config.frame_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let deadline = tokio::time::sleep_until(session.deadline());
        tokio::pin!(deadline);
        tokio::pin!(manual_stop);

        let reason = loop {
            tokio::select! {
                biased;

                _ = &mut deadline => {
                    info!("Timeout reached, stopping recording");
                    break StopReason::Deadline;
                }

                _ = &mut manual_stop => {
                    info!("Recording stopped on request");
                    break StopReason::Manual;
                }

                _ = ticker.tick() => {
                    capture.read_waveform(&mut window);
                    let level = rms(&window);
                    debug!(level, "frame");

                    if session.observe(level, Instant::now()) {
                        info!("Silence detected, stopping recording");
                        break StopReason::Silence;
                    }
                }
            }
        };

        session.push_fragments(capture.stop());
        session.finish(reason)
    }
}
