//! `look` and `examine`.

use std::sync::Arc;

use hearth_types::Command;
use hearth_world::{Session, World};

use super::{actor, tell_lines};
use crate::error::CommandError;
use crate::view;

/// `look [target]`; defaults to the current room.
pub fn look(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    let player = actor(session)?;
    let target = world.find_target(session, command)?;
    tell_lines(session, &view::look(&player, &target));
    Ok(())
}

/// `examine [target]`: keys, owner, flags, and links.
pub fn examine(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    let target = world.find_target(session, command)?;
    tell_lines(session, &view::examine(&target));
    Ok(())
}
