//! Error types for the `hearth-world` crate.
//!
//! Every failing world operation leaves the world exactly as it found it.

use hearth_types::Key;

/// Errors that can occur during world-graph operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// An exit with the same case-insensitive name already departs the room.
    #[error("exit {name:?} already departs room {room}")]
    DuplicateExit {
        /// The rejected exit name.
        name: String,
        /// The source room.
        room: Key,
    },

    /// A player with the same case-insensitive name already exists.
    #[error("player name {0:?} is taken")]
    NameTaken(String),

    /// The supplied name is empty.
    #[error("name must not be empty")]
    InvalidName,

    /// No room has the given key.
    #[error("room not found: {0}")]
    RoomNotFound(Key),

    /// A target name did not resolve to anything visible.
    #[error("nothing named {0:?} here")]
    NotFound(String),

    /// The player already has a session attached.
    #[error("player {0} is already connected")]
    AlreadyConnected(Key),

    /// Player names are identities and cannot be changed.
    #[error("player {0} cannot be renamed")]
    PlayerRename(Key),
}
