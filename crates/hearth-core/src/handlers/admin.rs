//! Wizard-only verbs.

use std::sync::Arc;

use hearth_types::{Command, Flags};
use hearth_world::{Object, Session, World};
use tracing::info;

use super::actor;
use crate::error::CommandError;

/// `@set <target> [!]<flag>`: grant a flag, or clear it with a leading `!`.
pub fn set(world: &World, session: &Arc<Session>, command: &Command) -> Result<(), CommandError> {
    let player = actor(session)?;
    if !player.is_set(Flags::WIZARD) {
        return Err(CommandError::PermissionDenied);
    }
    let target = world.find_target(session, command)?;

    let (clear, flag_name) = match command.args.strip_prefix('!') {
        Some(rest) => (true, rest.trim()),
        None => (false, command.args.trim()),
    };
    if flag_name.is_empty() {
        return Err(CommandError::Usage("What do you want to set?"));
    }
    let flag = Flags::from_name(flag_name).ok_or(CommandError::UnknownFlag)?;

    if clear {
        target.clear_flag(flag);
        session.tell("Flag cleared.");
    } else {
        target.set_flag(flag);
        session.tell("Flag set.");
    }
    info!(
        player = %player.key(),
        key = %target.key(),
        flag = flag_name,
        clear,
        flags = %target.flags(),
        "flags changed"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hearth_types::SessionId;

    use super::*;

    #[test]
    fn wizard_sets_and_clears_builder() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let wiz = world.create_player("wiz", "pw", &hall).unwrap();
        wiz.set_flag(Flags::WIZARD);
        let bob = world.create_player("bob", "foo", &hall).unwrap();
        let (session, _rx) = Session::channel(SessionId(1));
        world.connect(&session, &wiz).unwrap();

        set(&world, &session, &Command::new("@set", "bob", "builder")).unwrap();
        assert!(bob.is_set(Flags::BUILDER));
        set(&world, &session, &Command::new("@set", "bob", "!builder")).unwrap();
        assert!(!bob.is_set(Flags::BUILDER));

        let err = set(&world, &session, &Command::new("@set", "bob", "!")).unwrap_err();
        assert_eq!(err, CommandError::Usage("What do you want to set?"));
        let err = set(&world, &session, &Command::new("@set", "bob", "juggler")).unwrap_err();
        assert_eq!(err, CommandError::UnknownFlag);
    }

    #[test]
    fn non_wizards_are_refused() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let bob = world.create_player("bob", "foo", &hall).unwrap();
        let (session, _rx) = Session::channel(SessionId(1));
        world.connect(&session, &bob).unwrap();

        let err = set(&world, &session, &Command::new("@set", "me", "wizard")).unwrap_err();
        assert_eq!(err, CommandError::PermissionDenied);
        assert!(!bob.is_set(Flags::WIZARD));
    }
}
