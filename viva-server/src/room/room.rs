use crate::room::ConnectionId;
use std::collections::HashMap;
use viva_core::ParticipantId;

/// Membership of one room: each participant and the connection it joined on.
#[derive(Debug, Default)]
pub struct Room {
    members: HashMap<ParticipantId, ConnectionId>,
}

impl Room {
    pub fn contains(&self, participant: &ParticipantId) -> bool {
        self.members.contains_key(participant)
    }

    pub fn connection_of(&self, participant: &ParticipantId) -> Option<ConnectionId> {
        self.members.get(participant).copied()
    }

    /// The automated agent, if one is in the room.
    pub fn agent(&self) -> Option<&ParticipantId> {
        self.members.keys().find(|p| p.is_agent())
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Connections of every member except `participant`.
    pub fn others(&self, participant: &ParticipantId) -> Vec<ConnectionId> {
        self.members
            .iter()
            .filter(|(id, _)| *id != participant)
            .map(|(_, conn)| *conn)
            .collect()
    }

    pub fn participants(&self) -> Vec<ParticipantId> {
        let mut ids: Vec<_> = self.members.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub(crate) fn insert(&mut self, participant: ParticipantId, connection: ConnectionId) {
        self.members.insert(participant, connection);
    }

    pub(crate) fn remove(&mut self, participant: &ParticipantId) -> Option<ConnectionId> {
        self.members.remove(participant)
    }
}
