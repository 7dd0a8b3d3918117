//! Shared type definitions for the Hearth world server.
//!
//! Every crate in the workspace speaks in terms of these types: entity
//! keys, capability flags, entity kinds, and the parsed [`Command`] that
//! flows from the parser to the verb handlers.
//!
//! # Modules
//!
//! - [`ids`] -- Integer key wrappers for entities and sessions
//! - [`flags`] -- Capability bitset (wizard, builder, programmer)
//! - [`enums`] -- Entity kind tag
//! - [`command`] -- The parsed form of one line of player input

pub mod command;
pub mod enums;
pub mod flags;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use command::Command;
pub use enums::EntityKind;
pub use flags::Flags;
pub use ids::{Key, SessionId};
