use crate::room::{ConnectionId, Room};
use std::collections::HashMap;
use thiserror::Error;
use viva_core::{ParticipantId, RoomId};

/// Room and participant a connection announced with `join-room`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub room: RoomId,
    pub participant: ParticipantId,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinRejected {
    #[error("participant {0} is already in the room")]
    DuplicateParticipant(ParticipantId),
    #[error("room already has agent {0}")]
    AgentPresent(ParticipantId),
    #[error("connection already joined as {0}")]
    AlreadyJoined(ParticipantId),
}

/// Tracks which participants are in which room. Rooms exist only while they have members.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomId, Room>,
    memberships: HashMap<ConnectionId, Membership>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `participant` in `room` on behalf of `connection`.
    ///
    /// The connection must not hold a membership yet; callers leave first when a
    /// connection switches rooms.
    pub fn join(
        &mut self,
        connection: ConnectionId,
        room: RoomId,
        participant: ParticipantId,
    ) -> Result<(), JoinRejected> {
        if let Some(existing) = self.memberships.get(&connection) {
            return Err(JoinRejected::AlreadyJoined(existing.participant.clone()));
        }

        self.admits(connection, &room, &participant)?;

        self.rooms
            .entry(room.clone())
            .or_default()
            .insert(participant.clone(), connection);
        self.memberships
            .insert(connection, Membership { room, participant });
        Ok(())
    }

    /// Whether `room` would take `participant` from `connection`, ignoring any membership the
    /// connection itself holds there.
    pub fn admits(
        &self,
        connection: ConnectionId,
        room: &RoomId,
        participant: &ParticipantId,
    ) -> Result<(), JoinRejected> {
        let Some(members) = self.rooms.get(room) else {
            return Ok(());
        };

        if members
            .connection_of(participant)
            .is_some_and(|holder| holder != connection)
        {
            return Err(JoinRejected::DuplicateParticipant(participant.clone()));
        }

        if participant.is_agent() {
            if let Some(agent) = members.agent() {
                if members.connection_of(agent) != Some(connection) {
                    return Err(JoinRejected::AgentPresent(agent.clone()));
                }
            }
        }

        Ok(())
    }

    /// Removes whatever membership `connection` holds, forgetting the room once empty.
    pub fn leave(&mut self, connection: ConnectionId) -> Option<Membership> {
        let membership = self.memberships.remove(&connection)?;

        if let Some(members) = self.rooms.get_mut(&membership.room) {
            members.remove(&membership.participant);
            if members.is_empty() {
                self.rooms.remove(&membership.room);
            }
        }

        Some(membership)
    }

    pub fn membership(&self, connection: ConnectionId) -> Option<&Membership> {
        self.memberships.get(&connection)
    }

    pub fn room(&self, room: &RoomId) -> Option<&Room> {
        self.rooms.get(room)
    }

    pub fn members(&self, room: &RoomId) -> Vec<ParticipantId> {
        self.rooms
            .get(room)
            .map(Room::participants)
            .unwrap_or_default()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
