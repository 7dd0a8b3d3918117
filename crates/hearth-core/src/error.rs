//! Error types for the `hearth-core` crate.
//!
//! A [`CommandError`] is a refused command. Its `Display` text is exactly
//! what the issuing client sees, and the dispatcher is the only place that
//! renders it; nothing here ever reaches the connection loop.

use hearth_world::WorldError;

/// Broad class of a refused command, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed arguments.
    Validation,
    /// The named target, exit, room, or player does not exist.
    NotFound,
    /// A name clash on creation.
    Conflict,
    /// The actor lacks the required flag or ownership.
    Permission,
    /// Authentication failed.
    Auth,
    /// The server cannot serve the request right now.
    Unavailable,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Permission => "permission",
            Self::Auth => "auth",
            Self::Unavailable => "unavailable",
        };
        f.write_str(label)
    }
}

/// A command the handler refused. No world state was changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Required fields were missing; the payload is the usage hint.
    #[error("{0}")]
    Usage(&'static str),

    /// The named target is not visible from here.
    #[error("I don't see that here.")]
    NotHere,

    /// No player has the given name.
    #[error("No such player!")]
    NoSuchPlayer,

    /// No exit of the current room has the given name.
    #[error("There's no exit in that direction!")]
    NoSuchExit,

    /// No room has the given number.
    #[error("That destination doesn't exist.")]
    NoSuchRoom,

    /// The room number could not be parsed.
    #[error("I didn't understand that room number.")]
    BadRoomNumber,

    /// The flag name is not one of the known flags.
    #[error("I don't know that flag.")]
    UnknownFlag,

    /// A player already uses the name.
    #[error("Sorry, that name is in use.")]
    NameTaken,

    /// An exit of the current room already uses the name.
    #[error("There's already an exit by that name here.")]
    ExitExists,

    /// The name is empty or otherwise unusable.
    #[error("That name is not allowed.")]
    InvalidName,

    /// The actor lacks the flag or ownership the action needs.
    #[error("You don't have permission to do that.")]
    PermissionDenied,

    /// The password did not match.
    #[error("Incorrect password.")]
    IncorrectPassword,

    /// Another session already holds the player.
    #[error("Already connected!")]
    AlreadyConnected,

    /// The session has no player attached.
    #[error("You need to connect first.")]
    NotConnected,

    /// The world is not ready to accept new players.
    #[error("Sorry, we can't create any players right now.")]
    Unavailable,
}

impl CommandError {
    /// Broad class of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) | Self::BadRoomNumber | Self::InvalidName => ErrorKind::Validation,
            Self::NotHere
            | Self::NoSuchPlayer
            | Self::NoSuchExit
            | Self::NoSuchRoom
            | Self::UnknownFlag => ErrorKind::NotFound,
            Self::NameTaken | Self::ExitExists => ErrorKind::Conflict,
            Self::PermissionDenied => ErrorKind::Permission,
            Self::IncorrectPassword | Self::AlreadyConnected | Self::NotConnected => {
                ErrorKind::Auth
            }
            Self::Unavailable => ErrorKind::Unavailable,
        }
    }
}

impl From<WorldError> for CommandError {
    fn from(err: WorldError) -> Self {
        match err {
            WorldError::DuplicateExit { .. } => Self::ExitExists,
            WorldError::NameTaken(_) => Self::NameTaken,
            WorldError::InvalidName => Self::InvalidName,
            WorldError::RoomNotFound(_) => Self::NoSuchRoom,
            WorldError::NotFound(_) => Self::NotHere,
            WorldError::AlreadyConnected(_) => Self::AlreadyConnected,
            WorldError::PlayerRename(_) => Self::PermissionDenied,
        }
    }
}
