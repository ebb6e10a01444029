use crate::room::{ConnectionId, JoinRejected, RoomAction, RoomRegistry};
use tracing::{debug, info, warn};
use viva_core::{ClientMessage, NegotiationKind, ParticipantId, RoomId, ServerMessage};

/// Applies one inbound frame to the registry and returns what must happen as a result.
pub fn dispatch(
    registry: &mut RoomRegistry,
    connection: ConnectionId,
    message: ClientMessage,
) -> Vec<RoomAction> {
    match message {
        ClientMessage::JoinRoom {
            room_id,
            participant_id,
        } => join(registry, connection, room_id, participant_id),
        ClientMessage::WebrtcOffer { to, offer } => {
            relay(registry, connection, NegotiationKind::Offer, to, offer)
        }
        ClientMessage::WebrtcAnswer { to, answer } => {
            relay(registry, connection, NegotiationKind::Answer, to, answer)
        }
    }
}

/// Releases the membership held by a closed connection.
pub fn disconnect(registry: &mut RoomRegistry, connection: ConnectionId) -> Vec<RoomAction> {
    let mut actions = Vec::new();
    leave(registry, connection, &mut actions);
    actions
}

fn join(
    registry: &mut RoomRegistry,
    connection: ConnectionId,
    room: RoomId,
    participant: ParticipantId,
) -> Vec<RoomAction> {
    let mut actions = Vec::new();

    if let Some(current) = registry.membership(connection) {
        if current.room == room && current.participant == participant {
            debug!("{} re-announced itself in room '{}'", participant, room);
            return actions;
        }
    }

    // A rejected switch keeps the connection where it was.
    if let Err(e) = registry.admits(connection, &room, &participant) {
        warn!("Join of {} to room '{}' rejected: {}", participant, room, e);
        return actions;
    }
    leave(registry, connection, &mut actions);

    match registry.join(connection, room.clone(), participant.clone()) {
        Ok(()) => {}
        Err(JoinRejected::AlreadyJoined(current)) => {
            warn!("Connection {} is still joined as {}", connection, current);
            return actions;
        }
        Err(e) => {
            warn!("Join of {} to room '{}' rejected: {}", participant, room, e);
            return actions;
        }
    }

    info!("{} joined room '{}'", participant, room);

    let others = registry
        .room(&room)
        .map(|r| r.others(&participant))
        .unwrap_or_default();
    actions.extend(others.into_iter().map(|connection| RoomAction::Deliver {
        connection,
        message: ServerMessage::ParticipantJoined {
            participant_id: participant.clone(),
        },
    }));

    if !participant.is_agent() {
        actions.push(RoomAction::HumanJoined { room, participant });
    }

    actions
}

fn leave(registry: &mut RoomRegistry, connection: ConnectionId, actions: &mut Vec<RoomAction>) {
    let Some(membership) = registry.leave(connection) else {
        return;
    };

    info!("{} left room '{}'", membership.participant, membership.room);

    let remaining = registry
        .room(&membership.room)
        .map(|r| r.others(&membership.participant))
        .unwrap_or_default();
    actions.extend(remaining.into_iter().map(|connection| RoomAction::Deliver {
        connection,
        message: ServerMessage::ParticipantLeft {
            participant_id: membership.participant.clone(),
        },
    }));

    if !membership.participant.is_agent() {
        actions.push(RoomAction::HumanLeft {
            room: membership.room,
            participant: membership.participant,
        });
    }
}

fn relay(
    registry: &RoomRegistry,
    connection: ConnectionId,
    kind: NegotiationKind,
    to: ParticipantId,
    payload: serde_json::Value,
) -> Vec<RoomAction> {
    let Some(sender) = registry.membership(connection) else {
        warn!("Dropping {:?} from connection {} outside any room", kind, connection);
        return Vec::new();
    };

    let Some(target) = registry
        .room(&sender.room)
        .and_then(|r| r.connection_of(&to))
    else {
        // Negotiation tolerates stale targets; the sender is not told.
        debug!("Dropping {:?} from {} to absent {}", kind, sender.participant, to);
        return Vec::new();
    };

    vec![RoomAction::Deliver {
        connection: target,
        message: ServerMessage::negotiation(kind, sender.participant.clone(), payload),
    }]
}
