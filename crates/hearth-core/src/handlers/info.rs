//! `help` and `who`.

use std::sync::Arc;

use hearth_types::Command;
use hearth_world::{Object, Session, World};

use crate::error::CommandError;

const HELP: &[&str] = &[
    "Welcome to Hearth!",
    "",
    "Getting in:",
    "   connect <name> <password>     Connect to an existing player",
    "   newplayer <name> <password>   Create a new player",
    "",
    "Basic commands:",
    "   look [target]                 Look around, or at something",
    "   examine <target>              Look at something in detail",
    "   go <exit>                     Move to a new room",
    "   <exit>                        Move to a new room",
    "   say <text>  or  \"<text>       Say something",
    "   emote <text>  or  :<text>     Act something out",
    "   who                           List connected players",
    "   quit                          Leave the game",
    "",
    "Building:",
    "   @dig <exit> <room name>       Dig a new room",
    "   @link <exit> <room number>    Create a new exit to room #",
    "   @desc <target>=<text>         Describe something you own",
    "   @name <target>=<name>         Rename a room or exit you own",
    "   @set <target> [!]<flag>       Set or clear a flag (wizards)",
];

/// `help`
#[allow(clippy::unnecessary_wraps)]
pub fn help(_world: &World, session: &Arc<Session>, _command: &Command) -> Result<(), CommandError> {
    for line in HELP {
        session.tell(line);
    }
    Ok(())
}

/// `who`: list awake players.
#[allow(clippy::unnecessary_wraps)]
pub fn who(world: &World, session: &Arc<Session>, _command: &Command) -> Result<(), CommandError> {
    let awake = world.awake_players();
    if awake.is_empty() {
        session.tell("Nobody is connected.");
        return Ok(());
    }
    session.tell("Players online:");
    for player in &awake {
        session.tell(&format!("   {}", player.name()));
    }
    session.tell(&format!("{} connected.", awake.len()));
    Ok(())
}
