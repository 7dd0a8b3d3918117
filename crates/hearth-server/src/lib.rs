//! Line-oriented TCP front end for the Hearth world server.
//!
//! # Modules
//!
//! - [`config`] -- `hearth-config.yaml` loading with environment
//!   overrides.
//! - [`server`] -- Listener, accept loop, and shared server state.
//! - [`connection`] -- Per-client read loop and writer task.
//! - [`error`] -- Error types for startup and serving.

pub mod config;
pub mod connection;
pub mod error;
pub mod server;

pub use config::{ConfigError, HearthConfig};
pub use error::ServerError;
pub use server::{Server, ServerState};
