//! Exits: one-way links between rooms.
//!
//! An exit departs exactly one source room and leads to exactly one
//! destination. A return path needs a second exit created in the
//! destination room.

use std::sync::Arc;

use hearth_types::{EntityKind, Key};
use parking_lot::{
    MappedRwLockReadGuard, MappedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use crate::object::{Object, ObjectData};
use crate::room::Room;

/// A one-way link from a source room to a destination room.
pub struct Exit {
    key: Key,
    /// Key of the room this exit departs.
    source: Key,
    destination: Arc<Room>,
    object: RwLock<ObjectData>,
}

impl Exit {
    pub(crate) fn new(key: Key, name: &str, source: Key, destination: Arc<Room>) -> Self {
        Self {
            key,
            source,
            destination,
            object: RwLock::new(ObjectData::new(name)),
        }
    }

    /// Key of the room this exit departs.
    pub const fn source(&self) -> Key {
        self.source
    }

    /// The room this exit leads to.
    pub fn destination(&self) -> Arc<Room> {
        Arc::clone(&self.destination)
    }
}

impl Object for Exit {
    fn key(&self) -> Key {
        self.key
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Exit
    }

    fn object(&self) -> MappedRwLockReadGuard<'_, ObjectData> {
        RwLockReadGuard::map(self.object.read(), |o| o)
    }

    fn object_mut(&self) -> MappedRwLockWriteGuard<'_, ObjectData> {
        RwLockWriteGuard::map(self.object.write(), |o| o)
    }
}

impl core::fmt::Debug for Exit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Exit")
            .field("key", &self.key)
            .field("name", &self.object.try_read().map(|o| o.name().to_owned()))
            .field("source", &self.source)
            .field("destination", &self.destination.key())
            .finish()
    }
}
