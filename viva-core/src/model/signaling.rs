use crate::model::participant::ParticipantId;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationKind {
    Offer,
    Answer,
}

/// Frames a browser or agent sends to the signaling service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientMessage {
    JoinRoom {
        room_id: RoomId,
        participant_id: ParticipantId,
    },
    WebrtcOffer {
        to: ParticipantId,
        offer: Value,
    },
    WebrtcAnswer {
        to: ParticipantId,
        answer: Value,
    },
}

/// Frames the signaling service pushes to a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerMessage {
    IceConfig {
        ice_servers: Vec<IceServerConfig>,
    },
    ParticipantJoined {
        participant_id: ParticipantId,
    },
    ParticipantLeft {
        participant_id: ParticipantId,
    },
    WebrtcOffer {
        from: ParticipantId,
        offer: Value,
    },
    WebrtcAnswer {
        from: ParticipantId,
        answer: Value,
    },
}

impl ServerMessage {
    /// Wraps an opaque negotiation payload for delivery, stamping the sender.
    pub fn negotiation(kind: NegotiationKind, from: ParticipantId, payload: Value) -> Self {
        match kind {
            NegotiationKind::Offer => ServerMessage::WebrtcOffer {
                from,
                offer: payload,
            },
            NegotiationKind::Answer => ServerMessage::WebrtcAnswer {
                from,
                answer: payload,
            },
        }
    }
}
