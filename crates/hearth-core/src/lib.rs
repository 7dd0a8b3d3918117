//! Command parsing, dispatch, and verb handlers for the Hearth world
//! server.
//!
//! A raw input line goes through [`parser::parse`] to become a
//! [`hearth_types::Command`], then [`DispatchTable::dispatch`] checks the
//! verb against the session's authentication state and runs its handler.
//! Handlers reply to the issuing session and broadcast to the room where
//! the action is socially visible.
//!
//! # Modules
//!
//! - [`parser`] -- Line to command, including the `"`/`:` shortcuts and
//!   bare exit names.
//! - [`dispatch`] -- The verb table with pre- and post-auth gating.
//! - [`handlers`] -- One function per verb.
//! - [`view`] -- Text rendering for `look` and `examine`.
//! - [`error`] -- [`CommandError`], whose text is the user-visible reply.

pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod view;

pub use dispatch::{DispatchTable, Handler, Shape, UNRECOGNIZED, Verb};
pub use error::{CommandError, ErrorKind};
pub use parser::parse;
