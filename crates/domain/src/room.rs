//! The caller's view of its collaboration room.

use crate::ids::{RoomId, RoomKey, SessionId};

/// Collaboration room state as known to the caller.
///
/// Any field may be absent: before a room is joined, after leaving it, or
/// while the socket is still connecting. Remote sync only happens when all
/// three are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomContext {
    pub session: Option<SessionId>,
    pub room_id: Option<RoomId>,
    pub room_key: Option<RoomKey>,
}

/// A room with everything needed to talk to the backend.
#[derive(Debug, Clone, Copy)]
pub struct ActiveRoom<'a> {
    pub session: SessionId,
    pub room_id: &'a RoomId,
    pub room_key: &'a RoomKey,
}

impl RoomContext {
    pub fn new(session: SessionId, room_id: RoomId, room_key: RoomKey) -> Self {
        Self {
            session: Some(session),
            room_id: Some(room_id),
            room_key: Some(room_key),
        }
    }

    /// Not connected to any room.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ActiveRoom<'_>> {
        match (&self.session, &self.room_id, &self.room_key) {
            (Some(session), Some(room_id), Some(room_key)) => Some(ActiveRoom {
                session: *session,
                room_id,
                room_key,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_requires_all_three_parts() {
        let session = SessionId::new();
        let room_id = RoomId::new("abc").expect("room id");
        let room_key = RoomKey::new("key").expect("room key");

        let full = RoomContext::new(session, room_id.clone(), room_key.clone());
        let active = full.active().expect("active room");
        assert_eq!(active.session, session);
        assert_eq!(active.room_id, &room_id);

        let no_key = RoomContext {
            room_key: None,
            ..full.clone()
        };
        assert!(no_key.active().is_none());

        let no_session = RoomContext {
            session: None,
            ..full
        };
        assert!(no_session.active().is_none());

        assert!(RoomContext::detached().active().is_none());
    }
}
