//! Rooms, exits, players, and the shared world graph for the Hearth
//! world server.
//!
//! The world is a mutable graph accessed concurrently by every client
//! connection. Each entity carries its own lock; the one operation that
//! spans several entities (moving a player) acquires them in a fixed
//! order so concurrent moves never deadlock.
//!
//! # Modules
//!
//! - [`allocator`] -- Process-wide monotonically increasing entity keys.
//! - [`object`] -- [`ObjectData`] and the [`Object`] capability trait.
//! - [`room`], [`exit`], [`player`] -- The concrete entity kinds.
//! - [`entity`] -- [`Entity`], a tagged union over the three kinds.
//! - [`session`] -- Per-connection state and output channel.
//! - [`world`] -- [`World`]: creation, movement, lookup, broadcast.
//! - [`starting_world`] -- The lobby and bootstrap wizard.
//! - [`error`] -- Error types for world operations.

pub mod allocator;
pub mod entity;
pub mod error;
pub mod exit;
pub mod object;
pub mod player;
pub mod room;
pub mod session;
pub mod starting_world;
pub mod world;

// Re-export primary types at crate root.
pub use allocator::KeyAllocator;
pub use entity::Entity;
pub use error::WorldError;
pub use exit::Exit;
pub use object::{DEFAULT_DESCRIPTION, Object, ObjectData, normalize};
pub use player::{PasswordDigest, Player, hash_password};
pub use room::Room;
pub use session::{LINE_ENDING, Session};
pub use starting_world::{StartingWorld, StartingWorldOptions, create_starting_world};
pub use world::{World, find_by_normal_name};
