//! Verb handlers.
//!
//! Every handler follows the same order: check required fields, resolve
//! the target, check authorization, then mutate the world and reply. Any
//! refusal returns a [`CommandError`] before the mutation step, so a
//! refused command never changes state.

pub mod admin;
pub mod auth;
pub mod build;
pub mod info;
pub mod look;
pub mod movement;
pub mod social;

use std::sync::Arc;

use hearth_types::{Command, Flags};
use hearth_world::{Entity, Object, Player, Session};

use crate::error::CommandError;

/// The player attached to `session`.
pub(crate) fn actor(session: &Session) -> Result<Arc<Player>, CommandError> {
    session.player().ok_or(CommandError::NotConnected)
}

/// Refuse with `usage` unless both target and args are present.
pub(crate) fn require_both(command: &Command, usage: &'static str) -> Result<(), CommandError> {
    if command.has_target() && command.has_args() {
        Ok(())
    } else {
        Err(CommandError::Usage(usage))
    }
}

/// Builders and wizards may create rooms and exits.
pub(crate) fn can_build(actor: &Player) -> bool {
    actor.flags().intersects(Flags::BUILDER | Flags::WIZARD)
}

/// The actor may administer `target` if it is the actor, is owned by the
/// actor, or the actor is a wizard.
pub(crate) fn can_modify(actor: &Player, target: &Entity) -> bool {
    target.key() == actor.key() || target.is_owned_by(actor) || actor.is_set(Flags::WIZARD)
}

/// Send each line to the session.
pub(crate) fn tell_lines(session: &Session, lines: &[String]) {
    for line in lines {
        session.tell(line);
    }
}
