pub use viva_core::model::{ParticipantId, RoomId};

pub mod model {
    pub use viva_core::model::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use viva_server::*;
}

#[cfg(feature = "client")]
pub mod client {
    pub use viva_client::*;
}
