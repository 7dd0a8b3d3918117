//! The world a fresh server boots into.
//!
//! Nothing is persisted, so every process starts from the same seed: a
//! single lobby room (key `#1`, where new players arrive) and, when a
//! password is configured, a wizard who owns the lobby and can build
//! outward from it.

use std::sync::Arc;

use hearth_types::Flags;

use crate::error::WorldError;
use crate::object::Object;
use crate::player::Player;
use crate::room::Room;
use crate::world::World;

/// Parameters for [`create_starting_world`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingWorldOptions {
    /// Name of the lobby room.
    pub lobby_name: String,
    /// Description of the lobby room.
    pub lobby_description: String,
    /// Name of the bootstrap wizard.
    pub wizard_name: String,
    /// Password of the bootstrap wizard; no wizard is created without one.
    pub wizard_password: Option<String>,
}

impl Default for StartingWorldOptions {
    fn default() -> Self {
        Self {
            lobby_name: "The Lobby".to_owned(),
            lobby_description: String::new(),
            wizard_name: "Wizard".to_owned(),
            wizard_password: None,
        }
    }
}

/// Handles to the entities created at boot.
#[derive(Debug, Clone)]
pub struct StartingWorld {
    /// The lobby, where new players are placed.
    pub lobby: Arc<Room>,
    /// The bootstrap wizard, if one was configured.
    pub wizard: Option<Arc<Player>>,
}

/// Seed an empty `world` with the lobby and the optional wizard.
///
/// # Errors
///
/// Returns [`WorldError::NameTaken`] or [`WorldError::InvalidName`] if the
/// wizard cannot be created.
pub fn create_starting_world(
    world: &World,
    options: &StartingWorldOptions,
) -> Result<StartingWorld, WorldError> {
    let lobby = world.create_room(&options.lobby_name);
    lobby.set_description(&options.lobby_description);

    let wizard = match options.wizard_password.as_deref() {
        Some(password) => {
            let wizard = world.create_player(&options.wizard_name, password, &lobby)?;
            wizard.set_flag(Flags::WIZARD | Flags::BUILDER);
            lobby.set_owner(&wizard);
            Some(wizard)
        }
        None => None,
    };

    Ok(StartingWorld { lobby, wizard })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hearth_types::Key;

    use super::*;

    #[test]
    fn lobby_gets_the_first_key() {
        let world = World::new();
        let start = create_starting_world(&world, &StartingWorldOptions::default()).unwrap();
        assert_eq!(start.lobby.key(), Key(1));
        assert_eq!(world.starting_room().map(|r| r.key()), Some(Key(1)));
        assert!(start.wizard.is_none());
        assert_eq!(world.player_count(), 0);
    }

    #[test]
    fn wizard_owns_lobby_and_can_build() {
        let world = World::new();
        let options = StartingWorldOptions {
            wizard_password: Some("secret".to_owned()),
            ..StartingWorldOptions::default()
        };
        let start = create_starting_world(&world, &options).unwrap();
        let wizard = start.wizard.unwrap();
        assert!(wizard.is_set(Flags::WIZARD));
        assert!(wizard.is_set(Flags::BUILDER));
        assert!(wizard.check_password("secret"));
        assert!(start.lobby.is_owned_by(&wizard));
        assert!(start.lobby.contains_player(wizard.key()));
    }
}
