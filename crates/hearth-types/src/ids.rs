//! Type-safe identifier wrappers around `u64`.
//!
//! Entity keys are handed out by the world's key allocator, start at 1,
//! and are never reused. Their total order doubles as the lock order for
//! operations that touch more than one entity.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            /// Return the inner integer value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique key of a room, exit, or player.
    ///
    /// All three kinds share one key space, so a key alone identifies an
    /// entity anywhere in the world.
    Key, "#"
}

define_id! {
    /// Identifier of one client connection, used for log correlation.
    SessionId, "session-"
}
