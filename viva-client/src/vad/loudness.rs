use std::time::Duration;
use tokio::time::Instant;

/// Root-mean-square loudness of an unsigned 8-bit waveform, on a 0..1 scale.
pub fn rms(window: &[u8]) -> f32 {
    if window.is_empty() {
        return 0.0;
    }

    let energy: f32 = window
        .iter()
        .map(|&v| {
            let sample = (f32::from(v) - 128.0) / 128.0;
            sample * sample
        })
        .sum();
    (energy / window.len() as f32).sqrt()
}

/// Per-frame speech/silence bookkeeping for one recording.
#[derive(Debug, Clone)]
pub struct LoudnessTracker {
    threshold: f32,
    silence_budget: Duration,
    speech_detected: bool,
    silence_start: Option<Instant>,
}

impl LoudnessTracker {
    pub fn new(threshold: f32, silence_budget: Duration) -> Self {
        Self {
            threshold,
            silence_budget,
            speech_detected: false,
            silence_start: None,
        }
    }

    /// Feeds one frame's level. Returns `true` once speech has been followed by more than
    /// the silence budget of quiet frames.
    pub fn observe(&mut self, level: f32, now: Instant) -> bool {
        if level > self.threshold {
            self.speech_detected = true;
            self.silence_start = None;
            return false;
        }

        if !self.speech_detected {
            return false;
        }

        let start = *self.silence_start.get_or_insert(now);
        now.duration_since(start) > self.silence_budget
    }

    pub fn speech_detected(&self) -> bool {
        self.speech_detected
    }

    pub fn silence_start(&self) -> Option<Instant> {
        self.silence_start
    }
}
