//! Room signaling for interview sessions.
//!
//! Browsers and the automated interviewer connect over a WebSocket, announce the room they
//! belong to and exchange WebRTC offers/answers through the service. A single hub task owns
//! room membership and the agent lifecycle, so every join, leave and relay is processed in
//! arrival order.

pub mod agent;
pub mod app;
pub mod config;
pub mod room;
pub mod signaling;

pub use agent::*;
pub use app::router;
pub use config::{Config, ConfigError, load_config};
pub use room::*;
pub use signaling::*;
