//! Building verbs: `@desc`, `@name`, `@dig`, `@link`.

use std::sync::Arc;

use hearth_types::{Command, Key};
use hearth_world::{Object, Session, World};
use tracing::info;

use super::{actor, can_build, can_modify, require_both};
use crate::error::CommandError;

/// `@desc <target>=<text>`. Empty text restores the default description;
/// the target is required (`here` names the current room).
pub fn describe(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    if !command.has_target() {
        return Err(CommandError::Usage("Try: @desc <target>=<description>"));
    }
    let player = actor(session)?;
    let target = world.find_target(session, command)?;
    if !can_modify(&player, &target) {
        return Err(CommandError::PermissionDenied);
    }

    target.set_description(&command.args);
    session.tell("Description set.");
    Ok(())
}

/// `@name <target>=<name>` for rooms and exits.
pub fn rename(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    require_both(command, "Try: @name <target>=<name>")?;
    let player = actor(session)?;
    let target = world.find_target(session, command)?;
    if target.as_player().is_some() || !can_modify(&player, &target) {
        return Err(CommandError::PermissionDenied);
    }

    world.rename(&target, &command.args)?;
    session.tell("Name set.");
    Ok(())
}

/// `@dig <exit> <room name>`: a new room reached through a new exit here.
pub fn dig(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    let player = actor(session)?;
    if !can_build(&player) {
        return Err(CommandError::PermissionDenied);
    }
    require_both(command, "Dig what?")?;

    let (room, _) = world.dig(&player.location(), &command.target, &command.args, Some(&player))?;
    info!(player = %player.key(), key = %room.key(), "dug room");
    session.tell(&format!("Dug. {} is {}.", room.name(), room.key()));
    Ok(())
}

/// `@link <exit> <room number>`: a new exit here to an existing room.
///
/// The room number may be written `4` or `#4`.
pub fn link(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    let player = actor(session)?;
    if !can_build(&player) {
        return Err(CommandError::PermissionDenied);
    }
    require_both(command, "Link what?")?;

    let key = parse_room_number(&command.args)?;
    let destination = world.room(key).ok_or(CommandError::NoSuchRoom)?;
    world.create_exit(
        &player.location(),
        &command.target,
        &destination,
        Some(&player),
    )?;
    session.tell("Linked.");
    Ok(())
}

fn parse_room_number(text: &str) -> Result<Key, CommandError> {
    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    digits
        .parse::<u64>()
        .ok()
        .map(Key)
        .ok_or(CommandError::BadRoomNumber)
}
