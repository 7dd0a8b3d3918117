//! Players: the characters clients control.
//!
//! A player always has exactly one location. While a session is attached
//! the player is awake; `awake` is derived from the session slot, so the
//! two can never disagree.

use std::sync::Arc;

use hearth_types::{EntityKind, Key};
use parking_lot::{
    MappedRwLockReadGuard, MappedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard,
};
use sha2::{Digest, Sha512};

use crate::object::{Object, ObjectData};
use crate::room::Room;
use crate::session::Session;

/// Fixed-width SHA-512 digest of a password.
pub type PasswordDigest = [u8; 64];

/// Hash a raw password. The raw text is never stored.
pub fn hash_password(raw: &str) -> PasswordDigest {
    let digest = Sha512::digest(raw.as_bytes());
    let mut out = [0_u8; 64];
    out.copy_from_slice(&digest);
    out
}

/// Lock-protected mutable state of a player.
pub(crate) struct PlayerState {
    pub(crate) object: ObjectData,
    password: PasswordDigest,
    /// Current room. Only [`World::move_player`](crate::World::move_player)
    /// changes it, and only while holding both room locks.
    pub(crate) location: Arc<Room>,
    /// Attached session; `Some` exactly while the player is awake.
    pub(crate) session: Option<Arc<Session>>,
}

/// A character in the world.
pub struct Player {
    key: Key,
    state: RwLock<PlayerState>,
}

impl Player {
    /// Create an asleep player whose location is `location`.
    ///
    /// The player is not yet listed in `location`; the world completes the
    /// placement with a move.
    pub(crate) fn new(key: Key, name: &str, raw_password: &str, location: Arc<Room>) -> Self {
        Self {
            key,
            state: RwLock::new(PlayerState {
                object: ObjectData::new(name),
                password: hash_password(raw_password),
                location,
                session: None,
            }),
        }
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, PlayerState> {
        self.state.write()
    }

    /// The room the player is in.
    pub fn location(&self) -> Arc<Room> {
        Arc::clone(&self.state.read().location)
    }

    /// Whether a session is attached.
    pub fn is_awake(&self) -> bool {
        self.state.read().session.is_some()
    }

    /// The attached session, if the player is awake.
    pub fn session(&self) -> Option<Arc<Session>> {
        self.state.read().session.clone()
    }

    /// Compare `raw` against the stored digest.
    pub fn check_password(&self, raw: &str) -> bool {
        self.state.read().password == hash_password(raw)
    }

    /// Replace the stored digest with the digest of `raw`.
    pub fn set_password(&self, raw: &str) {
        self.state.write().password = hash_password(raw);
    }

    /// Send a message to the player's session.
    ///
    /// Returns `false` when the player is asleep; nothing is delivered and
    /// that is not an error.
    pub fn tell(&self, message: &str) -> bool {
        // Clone the session out so the player lock is not held while writing.
        let Some(session) = self.session() else {
            return false;
        };
        session.tell(message);
        true
    }
}

impl Object for Player {
    fn key(&self) -> Key {
        self.key
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn object(&self) -> MappedRwLockReadGuard<'_, ObjectData> {
        RwLockReadGuard::map(self.state.read(), |s| &s.object)
    }

    fn object_mut(&self) -> MappedRwLockWriteGuard<'_, ObjectData> {
        RwLockWriteGuard::map(self.state.write(), |s| &mut s.object)
    }
}

impl core::fmt::Debug for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut out = f.debug_struct("Player");
        out.field("key", &self.key);
        if let Some(state) = self.state.try_read() {
            out.field("name", &state.object.name())
                .field("location", &state.location.key())
                .field("awake", &state.session.is_some());
        }
        out.finish_non_exhaustive()
    }
}
