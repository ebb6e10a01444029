mod interview_control;
mod interview_outcome;
mod turn_orchestrator;

pub use interview_control::*;
pub use interview_outcome::*;
pub use turn_orchestrator::*;
