//! Speech and emotes.

use std::sync::Arc;

use hearth_types::Command;
use hearth_world::{Object, Session, World};

use super::actor;
use crate::error::CommandError;

/// `say <text>`
pub fn say(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    if !command.has_args() {
        return Err(CommandError::Usage("Say what?"));
    }
    let player = actor(session)?;
    session.tell(&format!("You say, \"{}\"", command.args));
    world.broadcast_except(&player, &format!("{} says, \"{}\"", player.name(), command.args));
    Ok(())
}

/// `emote <text>`: everyone present, the actor included, sees the same line.
pub fn emote(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    if !command.has_args() {
        return Err(CommandError::Usage("Emote what?"));
    }
    let player = actor(session)?;
    let line = format!("{} {}", player.name(), command.args);
    session.tell(&line);
    world.broadcast_except(&player, &line);
    Ok(())
}
