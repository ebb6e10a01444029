//! Server configuration loaded from a TOML file and environment overrides.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;
use viva_core::IceServerConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub agent: AgentConfig,

    /// STUN/TURN servers handed to every connection.
    #[serde(default = "default_ice_servers")]
    pub ice_servers: Vec<IceServerConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// File the configuration was read from; `None` when defaults were used.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// How the automated interviewer is brought into a room.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Executable started once per claimed room. No agent runs when unset.
    #[serde(default)]
    pub command: Option<String>,

    #[serde(default)]
    pub args: Vec<String>,

    /// Channel URL the agent process dials back into.
    #[serde(default = "default_signaling_url")]
    pub signaling_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"viva_server=debug,info"`.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))
}

fn default_port() -> u16 {
    3000
}

fn default_signaling_url() -> String {
    "ws://127.0.0.1:3000/ws".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_ice_servers() -> Vec<IceServerConfig> {
    vec![IceServerConfig {
        urls: vec!["stun:stun.l.google.com:19302".to_owned()],
        username: None,
        credential: None,
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            agent: AgentConfig::default(),
            ice_servers: default_ice_servers(),
            logging: LoggingConfig::default(),
            source: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            signaling_url: default_signaling_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults when it is missing.
///
/// Environment overrides: `VIVA_HOST`, `VIVA_PORT`, `VIVA_AGENT_COMMAND`,
/// `VIVA_SIGNALING_URL`, `VIVA_LOG_LEVEL`, `VIVA_LOG_JSON`, and `TURN_URL` with optional
/// `TURN_USERNAME` / `TURN_CREDENTIAL`, which appends a TURN server.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => Config {
                source: Some(PathBuf::from(p)),
                ..parse_config(&contents)?
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    Ok(apply_env(config, |key| std::env::var(key).ok()))
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

fn apply_env(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(host) = var("VIVA_HOST").and_then(|h| h.parse().ok()) {
        config.server.host = host;
    }
    if let Some(port) = var("VIVA_PORT").and_then(|p| p.parse().ok()) {
        config.server.port = port;
    }
    if let Some(command) = var("VIVA_AGENT_COMMAND") {
        config.agent.command = Some(command);
    }
    if let Some(url) = var("VIVA_SIGNALING_URL") {
        config.agent.signaling_url = url;
    }
    if let Some(level) = var("VIVA_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = var("VIVA_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
    if let Some(turn_url) = var("TURN_URL") {
        config.ice_servers.push(IceServerConfig {
            urls: vec![turn_url],
            username: var("TURN_USERNAME"),
            credential: var("TURN_CREDENTIAL"),
        });
    }

    config
}
