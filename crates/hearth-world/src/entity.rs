//! Tagged union over the three concrete entity kinds.
//!
//! Lookups that may land on a room, an exit, or a player return an
//! [`Entity`]. It implements [`Object`] by delegation; code that needs
//! room-only behavior matches on the variant.

use std::sync::Arc;

use hearth_types::{EntityKind, Key};
use parking_lot::{MappedRwLockReadGuard, MappedRwLockWriteGuard};

use crate::exit::Exit;
use crate::object::{Object, ObjectData};
use crate::player::Player;
use crate::room::Room;

/// Any room, exit, or player.
#[derive(Debug, Clone)]
pub enum Entity {
    /// A room.
    Room(Arc<Room>),
    /// An exit.
    Exit(Arc<Exit>),
    /// A player.
    Player(Arc<Player>),
}

impl Entity {
    /// The player, if this is one.
    pub const fn as_player(&self) -> Option<&Arc<Player>> {
        match self {
            Self::Player(player) => Some(player),
            _ => None,
        }
    }
}

impl Object for Entity {
    fn key(&self) -> Key {
        match self {
            Self::Room(room) => room.key(),
            Self::Exit(exit) => exit.key(),
            Self::Player(player) => player.key(),
        }
    }

    fn kind(&self) -> EntityKind {
        match self {
            Self::Room(_) => EntityKind::Room,
            Self::Exit(_) => EntityKind::Exit,
            Self::Player(_) => EntityKind::Player,
        }
    }

    fn object(&self) -> MappedRwLockReadGuard<'_, ObjectData> {
        match self {
            Self::Room(room) => room.object(),
            Self::Exit(exit) => exit.object(),
            Self::Player(player) => player.object(),
        }
    }

    fn object_mut(&self) -> MappedRwLockWriteGuard<'_, ObjectData> {
        match self {
            Self::Room(room) => room.object_mut(),
            Self::Exit(exit) => exit.object_mut(),
            Self::Player(player) => player.object_mut(),
        }
    }
}

impl From<Arc<Room>> for Entity {
    fn from(room: Arc<Room>) -> Self {
        Self::Room(room)
    }
}

impl From<Arc<Exit>> for Entity {
    fn from(exit: Arc<Exit>) -> Self {
        Self::Exit(exit)
    }
}

impl From<Arc<Player>> for Entity {
    fn from(player: Arc<Player>) -> Self {
        Self::Player(player)
    }
}
