//! Pre-authentication verbs and `quit`.

use std::sync::Arc;

use hearth_types::Command;
use hearth_world::{Entity, Object, Player, Session, World, normalize};
use tracing::info;

use super::tell_lines;
use crate::error::CommandError;
use crate::view;

/// Names reserved for target resolution.
const RESERVED_NAMES: [&str; 2] = ["me", "here"];

/// `connect <player> <password>`: attach the session to an existing player.
pub fn connect(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    super::require_both(command, "Try: connect <player> <password>")?;

    let player = world
        .find_player(&command.target)
        .ok_or(CommandError::NoSuchPlayer)?;
    if !player.check_password(&command.args) {
        info!(session = %session.id(), player = %player.key(), "bad password");
        return Err(CommandError::IncorrectPassword);
    }
    world.connect(session, &player)?;

    welcome(session, &player);
    Ok(())
}

/// `newplayer <player> <password>`: create a player in the starting room
/// and connect to it.
pub fn newplayer(
    world: &World,
    session: &Arc<Session>,
    command: &Command,
) -> Result<(), CommandError> {
    super::require_both(command, "Try: newplayer <player> <password>")?;

    if RESERVED_NAMES.contains(&normalize(&command.target).as_str()) {
        return Err(CommandError::NameTaken);
    }
    let start = world.starting_room().ok_or(CommandError::Unavailable)?;
    let player = world.create_player(&command.target, &command.args, &start)?;
    world.connect(session, &player)?;

    welcome(session, &player);
    Ok(())
}

/// Greet a freshly attached player and show them where they are.
fn welcome(session: &Session, player: &Player) {
    session.tell(&format!("Welcome, {}!", player.name()));
    tell_lines(session, &view::look(player, &Entity::Room(player.location())));
}

/// `quit`: ask the connection loop to close after this command.
#[allow(clippy::unnecessary_wraps)]
pub fn quit(_world: &World, session: &Arc<Session>, _command: &Command) -> Result<(), CommandError> {
    session.tell("Goodbye.");
    session.request_quit();
    Ok(())
}
