mod connection_id;
mod dispatch;
mod room;
mod room_action;
mod room_command;
mod room_hub;
mod room_registry;

pub use connection_id::*;
pub use dispatch::*;
pub use room::*;
pub use room_action::*;
pub use room_command::*;
pub use room_hub::*;
pub use room_registry::*;
