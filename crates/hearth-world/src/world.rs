//! The authoritative world graph.
//!
//! [`World`] owns every room, exit, and player together with the key
//! allocator, and is the only place the graph is mutated. It is shared
//! between all connection tasks behind an `Arc` and never torn down.
//!
//! # Lock hierarchy
//!
//! Locks are always acquired in this order and released by scope:
//!
//! 1. World collections: rooms, then exits, then players.
//! 2. A single player.
//! 3. Rooms, in ascending key order.
//! 4. Exits.
//!
//! A room or exit lock is never held while asking for a player lock.
//! Operations that visit the players of a room (broadcast, target lookup)
//! snapshot the occupant list under the room's read lock, release it, and
//! only then touch the players.

use std::collections::BTreeMap;
use std::sync::Arc;

use hearth_types::{Command, Key};
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::allocator::KeyAllocator;
use crate::entity::Entity;
use crate::error::WorldError;
use crate::exit::Exit;
use crate::object::{Object, normalize};
use crate::player::Player;
use crate::room::{Room, RoomState, find_exit};
use crate::session::Session;

/// The shared world: rooms linked by exits, with players inside rooms.
#[derive(Debug, Default)]
pub struct World {
    keys: KeyAllocator,
    rooms: RwLock<BTreeMap<Key, Arc<Room>>>,
    exits: RwLock<BTreeMap<Key, Arc<Exit>>>,
    players: RwLock<BTreeMap<Key, Arc<Player>>>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------

    /// Create a room. Always succeeds.
    pub fn create_room(&self, name: &str) -> Arc<Room> {
        let mut rooms = self.rooms.write();
        let room = Arc::new(Room::new(self.keys.next(), name));
        rooms.insert(room.key(), Arc::clone(&room));
        info!(key = %room.key(), name, "room created");
        room
    }

    /// Create an exit named `name` from `source` to `destination`.
    ///
    /// The exit appears in the world's exit collection and in the source
    /// room's exits in one step; no observer sees one without the other.
    /// When `owner` is given the exit is owned from the moment it appears.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateExit`] if an exit with the same
    /// case-insensitive name already departs `source`, or
    /// [`WorldError::InvalidName`] for an empty name. Nothing changes on
    /// failure.
    pub fn create_exit(
        &self,
        source: &Arc<Room>,
        name: &str,
        destination: &Arc<Room>,
        owner: Option<&Arc<Player>>,
    ) -> Result<Arc<Exit>, WorldError> {
        let mut exits = self.exits.write();
        let mut source_state = source.write();
        ensure_exit_free(&source_state, source.key(), name)?;
        let exit = self.insert_exit(
            &mut exits,
            source.key(),
            &mut source_state,
            (name, destination),
            owner,
        );
        info!(
            key = %exit.key(),
            name,
            source = %source.key(),
            destination = %destination.key(),
            "exit created"
        );
        Ok(exit)
    }

    /// Create a new room and an exit leading to it from `source`.
    ///
    /// Both entities are created under the same locks, so a name clash
    /// aborts before the room exists. When `owner` is given it owns both.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateExit`] or [`WorldError::InvalidName`];
    /// nothing is created in either case.
    pub fn dig(
        &self,
        source: &Arc<Room>,
        exit_name: &str,
        room_name: &str,
        owner: Option<&Arc<Player>>,
    ) -> Result<(Arc<Room>, Arc<Exit>), WorldError> {
        if normalize(room_name).is_empty() {
            return Err(WorldError::InvalidName);
        }

        let mut rooms = self.rooms.write();
        let mut exits = self.exits.write();
        let mut source_state = source.write();
        ensure_exit_free(&source_state, source.key(), exit_name)?;

        // The new room is private until inserted below.
        let room = Arc::new(Room::new(self.keys.next(), room_name));
        if let Some(owner) = owner {
            room.set_owner(owner);
        }
        let exit = self.insert_exit(
            &mut exits,
            source.key(),
            &mut source_state,
            (exit_name, &room),
            owner,
        );
        rooms.insert(room.key(), Arc::clone(&room));

        info!(
            room = %room.key(),
            exit = %exit.key(),
            source = %source.key(),
            room_name,
            exit_name,
            "room dug"
        );
        Ok((room, exit))
    }

    /// Create a player named `name` and place them in `start`.
    ///
    /// The password is hashed before it is stored. Placement goes through
    /// [`World::move_player`], so `start` lists the player on return.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NameTaken`] if any player's normalized name
    /// matches, or [`WorldError::InvalidName`] for an empty name. The
    /// player collection is unchanged on failure.
    pub fn create_player(
        &self,
        name: &str,
        raw_password: &str,
        start: &Arc<Room>,
    ) -> Result<Arc<Player>, WorldError> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return Err(WorldError::InvalidName);
        }

        // Holding the collection lock makes check-and-insert atomic.
        let mut players = self.players.write();
        if players.values().any(|p| p.normal_name() == wanted) {
            return Err(WorldError::NameTaken(name.trim().to_owned()));
        }

        let player = Arc::new(Player::new(
            self.keys.next(),
            name,
            raw_password,
            Arc::clone(start),
        ));
        players.insert(player.key(), Arc::clone(&player));
        self.move_player(&player, start);

        info!(key = %player.key(), name, start = %start.key(), "player created");
        Ok(player)
    }

    fn insert_exit(
        &self,
        exits: &mut BTreeMap<Key, Arc<Exit>>,
        source: Key,
        source_state: &mut RoomState,
        (name, destination): (&str, &Arc<Room>),
        owner: Option<&Arc<Player>>,
    ) -> Arc<Exit> {
        let exit = Arc::new(Exit::new(
            self.keys.next(),
            name,
            source,
            Arc::clone(destination),
        ));
        if let Some(owner) = owner {
            exit.set_owner(owner);
        }
        exits.insert(exit.key(), Arc::clone(&exit));
        source_state.exits.insert(exit.key(), Arc::clone(&exit));
        exit
    }

    // -------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------

    /// Move `player` into `destination` and return the room they left.
    ///
    /// Locks the player, then both rooms in ascending key order, so two
    /// concurrent moves over the same pair of rooms cannot deadlock. The
    /// removal, insertion, and location update happen under all three
    /// locks; no reader ever sees the player in two rooms or in none.
    /// Moving into the current room leaves the player where they are.
    pub fn move_player(&self, player: &Arc<Player>, destination: &Arc<Room>) -> Arc<Room> {
        let mut player_state = player.write();
        let origin = Arc::clone(&player_state.location);

        if origin.key() == destination.key() {
            destination
                .write()
                .players
                .insert(player.key(), Arc::clone(player));
            return origin;
        }

        {
            let (low, high) = if origin.key() < destination.key() {
                (&origin, destination)
            } else {
                (destination, &origin)
            };
            let mut low_state = low.write();
            let mut high_state = high.write();
            let (origin_state, destination_state) = if low.key() == origin.key() {
                (&mut low_state, &mut high_state)
            } else {
                (&mut high_state, &mut low_state)
            };

            origin_state.players.remove(&player.key());
            destination_state
                .players
                .insert(player.key(), Arc::clone(player));
            player_state.location = Arc::clone(destination);
        }

        debug!(
            player = %player.key(),
            from = %origin.key(),
            to = %destination.key(),
            "player moved"
        );
        origin
    }

    // -------------------------------------------------------------------
    // Sessions
    // -------------------------------------------------------------------

    /// Attach `session` to `player`, waking them, and announce it to the
    /// player's room.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::AlreadyConnected`] if another session holds
    /// the player; the existing session is left in place.
    pub fn connect(&self, session: &Arc<Session>, player: &Arc<Player>) -> Result<(), WorldError> {
        {
            let mut state = player.write();
            if state.session.is_some() {
                return Err(WorldError::AlreadyConnected(player.key()));
            }
            state.session = Some(Arc::clone(session));
        }
        session.attach(Arc::clone(player));

        let name = player.name();
        info!(session = %session.id(), player = %player.key(), name, "player connected");
        self.broadcast_except(player, &format!("{name} has connected."));
        Ok(())
    }

    /// Detach the player held by `session`, putting them to sleep, and
    /// announce it to their room.
    ///
    /// Returns the player that was detached. A second call for the same
    /// session finds nothing and announces nothing.
    pub fn disconnect(&self, session: &Arc<Session>) -> Option<Arc<Player>> {
        let player = session.detach()?;
        {
            let mut state = player.write();
            if state
                .session
                .as_ref()
                .is_some_and(|held| Arc::ptr_eq(held, session))
            {
                state.session = None;
            }
        }

        let name = player.name();
        info!(session = %session.id(), player = %player.key(), name, "player disconnected");
        self.broadcast_except(&player, &format!("{name} has disconnected."));
        Some(player)
    }

    // -------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------

    /// Resolve the target of `command` from the point of view of the
    /// session's player.
    ///
    /// Precedence: empty or `here` is the current room, `me` is the player,
    /// then exits of the current room, then players in it, each by
    /// case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NotFound`] when nothing matches or the session
    /// is not authenticated.
    pub fn find_target(&self, session: &Session, command: &Command) -> Result<Entity, WorldError> {
        let token = command.target.trim();
        let not_found = || WorldError::NotFound(token.to_owned());
        let actor = session.player().ok_or_else(not_found)?;
        let here = actor.location();

        let wanted = normalize(token);
        if wanted.is_empty() || wanted == "here" {
            return Ok(Entity::Room(here));
        }
        if wanted == "me" {
            return Ok(Entity::Player(actor));
        }
        if let Some(exit) = here.exit_named(&wanted) {
            return Ok(Entity::Exit(exit));
        }
        let occupants = here.players();
        find_by_normal_name(&occupants, &wanted)
            .map(Entity::Player)
            .ok_or_else(not_found)
    }

    /// Find a player anywhere in the world by case-insensitive name.
    pub fn find_player(&self, name: &str) -> Option<Arc<Player>> {
        let players = self.players.read();
        find_by_normal_name(players.values(), name)
    }

    /// Look up a room by key.
    pub fn room(&self, key: Key) -> Option<Arc<Room>> {
        self.rooms.read().get(&key).cloned()
    }

    /// Look up a player by key.
    pub fn player(&self, key: Key) -> Option<Arc<Player>> {
        self.players.read().get(&key).cloned()
    }

    /// The room new players start in: the first room ever created.
    pub fn starting_room(&self) -> Option<Arc<Room>> {
        self.rooms.read().values().next().cloned()
    }

    /// Snapshot of every room, in key order.
    pub fn rooms(&self) -> Vec<Arc<Room>> {
        self.rooms.read().values().cloned().collect()
    }

    /// Snapshot of every exit, in key order.
    pub fn exits(&self) -> Vec<Arc<Exit>> {
        self.exits.read().values().cloned().collect()
    }

    /// Snapshot of every player, in key order.
    pub fn players(&self) -> Vec<Arc<Player>> {
        self.players.read().values().cloned().collect()
    }

    /// Snapshot of every awake player, in key order.
    pub fn awake_players(&self) -> Vec<Arc<Player>> {
        let players = self.players();
        players.into_iter().filter(|p| p.is_awake()).collect()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.read().len()
    }

    /// Number of exits.
    pub fn exit_count(&self) -> usize {
        self.exits.read().len()
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.players.read().len()
    }

    // -------------------------------------------------------------------
    // Mutation of existing entities
    // -------------------------------------------------------------------

    /// Rename a room or an exit.
    ///
    /// Exit names stay unique among the exits of their source room.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::PlayerRename`] for players,
    /// [`WorldError::DuplicateExit`] when a sibling exit has the name, and
    /// [`WorldError::InvalidName`] for an empty name.
    pub fn rename(&self, entity: &Entity, name: &str) -> Result<(), WorldError> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return Err(WorldError::InvalidName);
        }
        match entity {
            Entity::Room(room) => {
                room.set_name(name);
                Ok(())
            }
            Entity::Exit(exit) => {
                let source = self
                    .room(exit.source())
                    .ok_or(WorldError::RoomNotFound(exit.source()))?;
                let state = source.write();
                let clash = state
                    .exits
                    .values()
                    .any(|other| other.key() != exit.key() && other.normal_name() == wanted);
                if clash {
                    return Err(WorldError::DuplicateExit {
                        name: name.trim().to_owned(),
                        room: source.key(),
                    });
                }
                exit.set_name(name);
                Ok(())
            }
            Entity::Player(player) => Err(WorldError::PlayerRename(player.key())),
        }
    }

    // -------------------------------------------------------------------
    // Messaging
    // -------------------------------------------------------------------

    /// Deliver `message` to every other awake player in `origin`'s room.
    ///
    /// Asleep players are skipped silently. Returns how many players
    /// received the message.
    pub fn broadcast_except(&self, origin: &Player, message: &str) -> usize {
        let room = origin.location();
        self.broadcast_room(&room, Some(origin.key()), message)
    }

    /// Deliver `message` to every awake player in `room` except `except`.
    ///
    /// Occupants are snapshotted under the room's read lock first; a player
    /// entering or leaving mid-broadcast either gets the message or not,
    /// but never half of it.
    pub fn broadcast_room(&self, room: &Room, except: Option<Key>, message: &str) -> usize {
        let occupants = room.players();
        let delivered = occupants
            .iter()
            .filter(|p| Some(p.key()) != except)
            .filter(|p| p.tell(message))
            .count();
        debug!(room = %room.key(), delivered, "broadcast");
        delivered
    }
}

/// First entity among `items` whose normalized name equals `name`'s.
///
/// Uniqueness invariants mean at most one should match; the first wins.
pub fn find_by_normal_name<'a, T>(
    items: impl IntoIterator<Item = &'a Arc<T>>,
    name: &str,
) -> Option<Arc<T>>
where
    T: Object + 'a,
{
    let wanted = normalize(name);
    items
        .into_iter()
        .find(|item| item.normal_name() == wanted)
        .cloned()
}

fn ensure_exit_free(source: &RoomState, key: Key, name: &str) -> Result<(), WorldError> {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return Err(WorldError::InvalidName);
    }
    if find_exit(&source.exits, |o| o.normal_name() == wanted).is_some() {
        return Err(WorldError::DuplicateExit {
            name: name.trim().to_owned(),
            room: key,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hearth_types::SessionId;
    use tokio::sync::mpsc::UnboundedReceiver;

    use super::*;

    fn drain(rx: &mut UnboundedReceiver<String>) -> Vec<String> {
        let mut out = Vec::new();
        while let Ok(line) = rx.try_recv() {
            out.push(line);
        }
        out
    }

    fn connected(
        world: &World,
        player: &Arc<Player>,
        id: u64,
    ) -> (Arc<Session>, UnboundedReceiver<String>) {
        let (session, rx) = Session::channel(SessionId(id));
        world.connect(&session, player).unwrap();
        (session, rx)
    }

    #[test]
    fn keys_strictly_increase_across_kinds() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let (kitchen, door) = world.dig(&hall, "door", "Kitchen", None).unwrap();
        let back = world.create_exit(&kitchen, "out", &hall, None).unwrap();
        let bob = world.create_player("bob", "foo", &hall).unwrap();

        let keys = [hall.key(), kitchen.key(), door.key(), back.key(), bob.key()];
        assert!(keys.windows(2).all(|w| w.first() < w.get(1)));
        assert_eq!(hall.key(), Key(1));
    }

    #[test]
    fn duplicate_exit_is_rejected_without_changes() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let yard = world.create_room("The Yard");
        world.create_exit(&hall, "North", &yard, None).unwrap();

        let err = world.create_exit(&hall, "nORTH", &yard, None).unwrap_err();
        assert_eq!(
            err,
            WorldError::DuplicateExit {
                name: "nORTH".to_owned(),
                room: hall.key(),
            }
        );
        assert_eq!(world.exit_count(), 1);
        assert_eq!(hall.exit_count(), 1);
        assert_eq!(hall.exits().first().map(|e| e.name()), Some("North".to_owned()));
    }

    #[test]
    fn same_exit_name_is_fine_in_another_room() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let yard = world.create_room("The Yard");
        world.create_exit(&hall, "door", &yard, None).unwrap();
        world.create_exit(&yard, "door", &hall, None).unwrap();
        assert_eq!(world.exit_count(), 2);
    }

    #[test]
    fn created_exit_carries_its_owner() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let yard = world.create_room("The Yard");
        let bob = world.create_player("bob", "foo", &hall).unwrap();

        let gate = world.create_exit(&hall, "gate", &yard, Some(&bob)).unwrap();
        let door = world.create_exit(&hall, "door", &yard, None).unwrap();
        assert!(gate.is_owned_by(&bob));
        assert!(hall.exit_named("gate").unwrap().is_owned_by(&bob));
        assert!(door.owner().is_none());
    }

    #[test]
    fn dig_with_taken_exit_name_creates_nothing() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        world.dig(&hall, "east", "Garden", None).unwrap();
        assert_eq!(world.room_count(), 2);

        let err = world.dig(&hall, "East", "Other Garden", None).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateExit { .. }));
        assert_eq!(world.room_count(), 2);
        assert_eq!(world.exit_count(), 1);
        assert_eq!(hall.exit_count(), 1);
    }

    #[test]
    fn dig_sets_owner_and_links_destination() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let bob = world.create_player("bob", "foo", &hall).unwrap();
        let (garden, exit) = world.dig(&hall, "east", "Garden", Some(&bob)).unwrap();
        assert!(garden.is_owned_by(&bob));
        assert!(exit.is_owned_by(&bob));
        assert_eq!(exit.destination().key(), garden.key());
        assert_eq!(exit.source(), hall.key());
        assert!(hall.contains_exit(exit.key()));
    }

    #[test]
    fn player_names_are_unique_ignoring_case() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        world.create_player("Bob", "foo", &hall).unwrap();

        let err = world.create_player("bOB", "bar", &hall).unwrap_err();
        assert_eq!(err, WorldError::NameTaken("bOB".to_owned()));
        assert_eq!(world.player_count(), 1);
        assert_eq!(hall.player_count(), 1);
    }

    #[test]
    fn empty_player_name_is_invalid() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        assert_eq!(
            world.create_player("  ", "foo", &hall).unwrap_err(),
            WorldError::InvalidName
        );
        assert_eq!(world.player_count(), 0);
    }

    #[test]
    fn new_player_is_placed_in_start_room() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let bob = world.create_player("bob", "foo", &hall).unwrap();
        assert_eq!(bob.location().key(), hall.key());
        assert!(hall.contains_player(bob.key()));
        assert!(!bob.is_awake());
    }

    #[test]
    fn move_updates_both_rooms_and_location() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let yard = world.create_room("The Yard");
        let bob = world.create_player("bob", "foo", &hall).unwrap();

        let left = world.move_player(&bob, &yard);
        assert_eq!(left.key(), hall.key());
        assert!(!hall.contains_player(bob.key()));
        assert!(yard.contains_player(bob.key()));
        assert_eq!(bob.location().key(), yard.key());

        // Moving back crosses the same pair of rooms in the other key order.
        let left = world.move_player(&bob, &hall);
        assert_eq!(left.key(), yard.key());
        assert!(hall.contains_player(bob.key()));
        assert!(!yard.contains_player(bob.key()));
    }

    #[test]
    fn move_into_current_room_keeps_player_there() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let bob = world.create_player("bob", "foo", &hall).unwrap();
        world.move_player(&bob, &hall);
        assert_eq!(hall.player_count(), 1);
        assert_eq!(bob.location().key(), hall.key());
    }

    #[test]
    fn find_target_follows_precedence() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let yard = world.create_room("The Yard");
        let exit = world.create_exit(&hall, "jim", &yard, None).unwrap();
        let bob = world.create_player("bob", "foo", &hall).unwrap();
        let jim = world.create_player("Jim", "foo", &hall).unwrap();
        let sue = world.create_player("sue", "foo", &hall).unwrap();
        let (session, _rx) = connected(&world, &bob, 1);

        let lookup = |target: &str| {
            world
                .find_target(&session, &Command::new("look", target, ""))
                .map(|e| e.key())
        };
        assert_eq!(lookup(""), Ok(hall.key()));
        assert_eq!(lookup("HERE"), Ok(hall.key()));
        assert_eq!(lookup("me"), Ok(bob.key()));
        // An exit shadows a player of the same name.
        assert_eq!(lookup("JIM"), Ok(exit.key()));
        assert_eq!(lookup("Sue"), Ok(sue.key()));
        assert_eq!(lookup("nobody"), Err(WorldError::NotFound("nobody".to_owned())));

        // Players elsewhere are not visible.
        world.move_player(&jim, &yard);
        world.move_player(&sue, &yard);
        assert!(lookup("sue").is_err());
    }

    #[test]
    fn find_target_needs_a_player() {
        let world = World::new();
        world.create_room("The Hall");
        let (session, _rx) = Session::channel(SessionId(1));
        assert!(world.find_target(&session, &Command::new("look", "", "")).is_err());
    }

    #[test]
    fn broadcast_reaches_awake_roommates_only() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let yard = world.create_room("The Yard");
        let bob = world.create_player("bob", "foo", &hall).unwrap();
        let jim = world.create_player("jim", "foo", &hall).unwrap();
        world.create_player("sleepy", "foo", &hall).unwrap();
        let sue = world.create_player("sue", "foo", &yard).unwrap();

        let (_bob_session, mut bob_rx) = connected(&world, &bob, 1);
        let (_jim_session, mut jim_rx) = connected(&world, &jim, 2);
        let (_sue_session, mut sue_rx) = connected(&world, &sue, 3);
        drain(&mut bob_rx);
        drain(&mut jim_rx);
        drain(&mut sue_rx);

        let delivered = world.broadcast_except(&bob, "bob waves.");
        assert_eq!(delivered, 1);
        assert!(drain(&mut bob_rx).is_empty());
        assert_eq!(drain(&mut jim_rx), vec!["bob waves.\r\n".to_owned()]);
        assert!(drain(&mut sue_rx).is_empty());
    }

    #[test]
    fn connect_refuses_second_session() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let bob = world.create_player("bob", "foo", &hall).unwrap();
        let (first, _rx1) = connected(&world, &bob, 1);
        let (second, _rx2) = Session::channel(SessionId(2));

        assert_eq!(
            world.connect(&second, &bob),
            Err(WorldError::AlreadyConnected(bob.key()))
        );
        assert!(!second.is_authenticated());
        assert!(Arc::ptr_eq(&bob.session().unwrap(), &first));
    }

    #[test]
    fn disconnect_sleeps_player_and_notifies_once() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let bob = world.create_player("bob", "foo", &hall).unwrap();
        let jim = world.create_player("jim", "foo", &hall).unwrap();
        let (jim_session, mut jim_rx) = connected(&world, &jim, 1);
        let (bob_session, _bob_rx) = connected(&world, &bob, 2);
        assert_eq!(drain(&mut jim_rx), vec!["bob has connected.\r\n".to_owned()]);

        let gone = world.disconnect(&bob_session).unwrap();
        assert_eq!(gone.key(), bob.key());
        assert!(!bob.is_awake());
        assert!(bob.session().is_none());
        assert!(!bob_session.is_authenticated());
        assert!(world.disconnect(&bob_session).is_none());
        assert_eq!(drain(&mut jim_rx), vec!["bob has disconnected.\r\n".to_owned()]);
        assert!(jim_session.is_authenticated());
    }

    #[test]
    fn rename_keeps_exit_names_unique() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let yard = world.create_room("The Yard");
        let north = world.create_exit(&hall, "north", &yard, None).unwrap();
        world.create_exit(&hall, "south", &yard, None).unwrap();
        let entity = Entity::Exit(Arc::clone(&north));

        assert!(matches!(
            world.rename(&entity, "South"),
            Err(WorldError::DuplicateExit { .. })
        ));
        // Renaming to a different case of its own name is allowed.
        world.rename(&entity, "North").unwrap();
        assert_eq!(north.name(), "North");

        let bob = world.create_player("bob", "foo", &hall).unwrap();
        assert_eq!(
            world.rename(&Entity::Player(Arc::clone(&bob)), "robert"),
            Err(WorldError::PlayerRename(bob.key()))
        );
    }

    #[test]
    fn find_player_ignores_case() {
        let world = World::new();
        let hall = world.create_room("The Hall");
        let bob = world.create_player("Bob", "foo", &hall).unwrap();
        assert_eq!(world.find_player("BOB").map(|p| p.key()), Some(bob.key()));
        assert!(world.find_player("jim").is_none());
    }
}
