//! Device seams: microphone capture and bot audio playback.

use crate::error::ClientError;
use async_trait::async_trait;
use bytes::Bytes;

/// A live microphone recording.
///
/// Dropping a capture without calling [`AudioCapture::stop`] must still release the device.
pub trait AudioCapture: Send {
    /// Copies the current time-domain waveform into `window`: unsigned 8-bit samples where
    /// 128 is silence.
    fn read_waveform(&mut self, window: &mut [u8]);

    /// Stops recording, releases the hardware stream and returns every captured fragment.
    fn stop(&mut self) -> Vec<Bytes>;
}

#[async_trait]
pub trait Microphone: Send + Sync {
    /// Acquires the microphone and starts recording.
    ///
    /// Fails with [`ClientError::Media`] when permission is denied or no device exists.
    async fn open(&self) -> Result<Box<dyn AudioCapture>, ClientError>;
}

#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Plays `url` and resolves once playback has ended.
    async fn play(&self, url: &str) -> Result<(), ClientError>;
}
