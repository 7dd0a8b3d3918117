//! Rooms: the nodes of the world graph.
//!
//! A [`Room`] holds its [`ObjectData`] together with the exits departing
//! it and the players currently inside it, all behind one lock. Both
//! collections are denormalized views of relationships the [`World`]
//! also tracks, and only the world mutates them.
//!
//! [`World`]: crate::World

use std::collections::BTreeMap;
use std::sync::Arc;

use hearth_types::{EntityKind, Key};
use parking_lot::{
    MappedRwLockReadGuard, MappedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use crate::exit::Exit;
use crate::object::{Object, ObjectData, normalize};
use crate::player::Player;

/// Lock-protected mutable state of a room.
#[derive(Default)]
pub(crate) struct RoomState {
    pub(crate) object: ObjectData,
    /// Exits departing this room, keyed by exit key.
    pub(crate) exits: BTreeMap<Key, Arc<Exit>>,
    /// Players located here, keyed by player key.
    pub(crate) players: BTreeMap<Key, Arc<Player>>,
}

/// A place in the world.
pub struct Room {
    key: Key,
    state: RwLock<RoomState>,
}

impl Room {
    /// Create an empty room. Only the world allocates keys, so this is
    /// crate-private.
    pub(crate) fn new(key: Key, name: &str) -> Self {
        Self {
            key,
            state: RwLock::new(RoomState {
                object: ObjectData::new(name),
                ..RoomState::default()
            }),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, RoomState> {
        self.state.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, RoomState> {
        self.state.write()
    }

    /// Snapshot of the exits departing this room, in key order.
    pub fn exits(&self) -> Vec<Arc<Exit>> {
        self.read().exits.values().cloned().collect()
    }

    /// Snapshot of the players located here, in key order.
    pub fn players(&self) -> Vec<Arc<Player>> {
        self.read().players.values().cloned().collect()
    }

    /// Number of exits departing this room.
    pub fn exit_count(&self) -> usize {
        self.read().exits.len()
    }

    /// Number of players located here.
    pub fn player_count(&self) -> usize {
        self.read().players.len()
    }

    /// Check whether the player with `key` is located here.
    pub fn contains_player(&self, key: Key) -> bool {
        self.read().players.contains_key(&key)
    }

    /// Check whether the exit with `key` departs this room.
    pub fn contains_exit(&self, key: Key) -> bool {
        self.read().exits.contains_key(&key)
    }

    /// Find a departing exit by name, ignoring case.
    pub fn exit_named(&self, name: &str) -> Option<Arc<Exit>> {
        let wanted = normalize(name);
        let state = self.read();
        find_exit(&state.exits, |exit| exit.normal_name() == wanted)
    }

    /// Find a departing exit whose display name matches `name` exactly.
    ///
    /// Used for bare-word movement, where the typed word must match the
    /// exit as it was named.
    pub fn exit_named_exactly(&self, name: &str) -> Option<Arc<Exit>> {
        let state = self.read();
        find_exit(&state.exits, |exit| exit.name() == name)
    }
}

/// First exit in `exits` whose object data satisfies `matches`.
///
/// Takes exit locks while the caller holds the room lock; that order
/// (room, then exit) is part of the world's lock hierarchy.
pub(crate) fn find_exit(
    exits: &BTreeMap<Key, Arc<Exit>>,
    matches: impl Fn(&ObjectData) -> bool,
) -> Option<Arc<Exit>> {
    exits
        .values()
        .find(|exit| matches(&exit.object()))
        .cloned()
}

impl Object for Room {
    fn key(&self) -> Key {
        self.key
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Room
    }

    fn object(&self) -> MappedRwLockReadGuard<'_, ObjectData> {
        RwLockReadGuard::map(self.read(), |s| &s.object)
    }

    fn object_mut(&self) -> MappedRwLockWriteGuard<'_, ObjectData> {
        RwLockWriteGuard::map(self.write(), |s| &mut s.object)
    }
}

impl core::fmt::Debug for Room {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Occupants point back at their room, so only shallow fields.
        f.debug_struct("Room")
            .field("key", &self.key)
            .field(
                "name",
                &self.state.try_read().map(|s| s.object.name().to_owned()),
            )
            .finish_non_exhaustive()
    }
}
