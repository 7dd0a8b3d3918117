//! Enumeration types shared across the workspace.

use serde::{Deserialize, Serialize};

/// The concrete kind of a world entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A place in the world.
    Room,
    /// A one-way link from one room to another.
    Exit,
    /// A character controlled by a connected client.
    Player,
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Room => "room",
            Self::Exit => "exit",
            Self::Player => "player",
        };
        f.write_str(label)
    }
}
