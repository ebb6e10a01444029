mod agent_api;
mod http_agent_api;

pub use agent_api::*;
pub use http_agent_api::*;
