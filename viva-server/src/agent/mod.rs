mod agent_error;
mod agent_launcher;
mod lifecycle;
mod process_launcher;

pub use agent_error::*;
pub use agent_launcher::*;
pub use lifecycle::*;
pub use process_launcher::*;
