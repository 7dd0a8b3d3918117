//! `go <exit>` and the bare-exit shortcut.

use std::sync::Arc;

use hearth_types::Command;
use hearth_world::{Entity, Object, Session, World};

use super::{actor, tell_lines};
use crate::error::CommandError;
use crate::view;

/// Move the actor through the named exit of their room.
///
/// The old room hears the departure, the new room the arrival, and the
/// actor sees the new room.
pub fn go(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    if !command.has_target() {
        return Err(CommandError::Usage("Go where?"));
    }
    let player = actor(session)?;
    let exit = player
        .location()
        .exit_named(&command.target)
        .ok_or(CommandError::NoSuchExit)?;
    let destination = exit.destination();

    let previous = world.move_player(&player, &destination);
    let name = player.name();
    world.broadcast_room(&previous, Some(player.key()), &format!("{name} has left."));
    world.broadcast_except(&player, &format!("{name} has arrived."));

    tell_lines(session, &view::look(&player, &Entity::Room(destination)));
    Ok(())
}
