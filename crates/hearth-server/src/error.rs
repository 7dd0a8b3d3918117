//! Error types for the `hearth-server` crate.

use crate::config::ConfigError;

/// Top-level error for the server.
///
/// Each variant wraps a failure of one startup or serving step, giving
/// `main` a single type to propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// Seeding the starting world failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: hearth_world::WorldError,
    },

    /// Failed to bind the listening socket.
    #[error("bind failed on {address}: {source}")]
    Bind {
        /// The address that could not be bound.
        address: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O error on the listener or a connection.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
