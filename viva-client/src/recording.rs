use crate::vad::{LoudnessTracker, StopReason, VoiceActivityConfig};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::{Bytes, BytesMut};
use std::time::Duration;
use tokio::time::Instant;

/// One answer being recorded: captured fragments, loudness state and the hard deadline.
#[derive(Debug)]
pub struct RecordingSession {
    started_at: Instant,
    deadline: Instant,
    tracker: LoudnessTracker,
    fragments: Vec<Bytes>,
    mime_type: String,
}

impl RecordingSession {
    pub fn start(config: &VoiceActivityConfig) -> Self {
        let started_at = Instant::now();
        Self {
            started_at,
            deadline: started_at + config.max_duration(),
            tracker: LoudnessTracker::new(config.silence_threshold, config.silence_budget()),
            fragments: Vec::new(),
            mime_type: config.mime_type.clone(),
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Feeds one frame's level; `true` when the silence budget ran out after speech.
    pub fn observe(&mut self, level: f32, now: Instant) -> bool {
        self.tracker.observe(level, now)
    }

    pub fn push_fragments(&mut self, fragments: impl IntoIterator<Item = Bytes>) {
        self.fragments.extend(fragments);
    }

    /// Joins the captured fragments into one audio object.
    pub fn finish(self, reason: StopReason) -> Recording {
        let size = self.fragments.iter().map(Bytes::len).sum();
        let mut data = BytesMut::with_capacity(size);
        for fragment in &self.fragments {
            data.extend_from_slice(fragment);
        }

        Recording {
            reason,
            elapsed: self.started_at.elapsed(),
            speech_detected: self.tracker.speech_detected(),
            audio: EncodedAudio {
                mime_type: self.mime_type,
                data: data.freeze(),
            },
        }
    }
}

/// A finished answer recording and why it ended.
#[derive(Debug, Clone)]
pub struct Recording {
    pub reason: StopReason,
    pub elapsed: Duration,
    pub speech_detected: bool,
    pub audio: EncodedAudio,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudio {
    mime_type: String,
    data: Bytes,
}

impl EncodedAudio {
    pub fn new(mime_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Body of the `audioData` field of `process-audio`.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}
