use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("agent API unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("agent API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid agent API URL: {0}")]
    InvalidUrl(String),

    #[error("unexpected agent API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("media unavailable: {0}")]
    Media(String),

    #[error("playback failed: {0}")]
    Playback(String),
}
