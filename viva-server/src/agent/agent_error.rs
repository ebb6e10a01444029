use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("failed to spawn agent command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stop agent process: {0}")]
    Stop(#[source] std::io::Error),
}
