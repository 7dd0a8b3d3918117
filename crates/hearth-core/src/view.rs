//! Text rendering of entities for `look` and `examine`.
//!
//! Renderers return lines rather than writing to a session so handlers
//! can send them in one go and tests can inspect them directly.

use std::sync::Arc;

use hearth_types::Flags;
use hearth_world::{Entity, Exit, Object, Player, Room};

/// Whether `viewer` sees keys next to names.
fn sees_keys(viewer: &Player, entity: &impl Object) -> bool {
    viewer.flags().intersects(Flags::WIZARD | Flags::BUILDER) || entity.is_owned_by(viewer)
}

fn title(viewer: &Player, entity: &impl Object) -> String {
    if sees_keys(viewer, entity) {
        entity.display_with_key()
    } else {
        entity.name()
    }
}

fn asleep_suffix(player: &Player) -> &'static str {
    if player.is_awake() { "" } else { " (asleep)" }
}

/// What `viewer` sees when looking at `entity`.
pub fn look(viewer: &Player, entity: &Entity) -> Vec<String> {
    match entity {
        Entity::Room(room) => look_room(viewer, room),
        Entity::Exit(exit) => vec![title(viewer, &**exit), exit.description()],
        Entity::Player(player) => {
            let mut lines = vec![title(viewer, &**player), player.description()];
            if !player.is_awake() {
                lines.push(format!("{} is asleep.", player.name()));
            }
            lines
        }
    }
}

/// Room title, description, exits, and the other occupants.
pub fn look_room(viewer: &Player, room: &Arc<Room>) -> Vec<String> {
    let mut lines = vec![title(viewer, &**room), room.description()];

    let exits = room.exits();
    if !exits.is_empty() {
        let names: Vec<String> = exits.iter().map(|exit| exit.name()).collect();
        lines.push(format!("Exits: {}", names.join(", ")));
    }

    let others: Vec<String> = room
        .players()
        .iter()
        .filter(|p| p.key() != viewer.key())
        .map(|p| format!("{}{}", p.name(), asleep_suffix(p)))
        .collect();
    if !others.is_empty() {
        lines.push(format!("Also here: {}", others.join(", ")));
    }
    lines
}

/// Detailed view of `entity`, always with keys.
pub fn examine(entity: &Entity) -> Vec<String> {
    let owner = entity
        .owner()
        .map_or_else(|| "nobody".to_owned(), |owner| owner.display_with_key());
    let mut lines = vec![
        format!("{} [{}]", entity.display_with_key(), entity.kind()),
        format!("Owner: {owner}"),
        format!("Flags: {}", entity.flags()),
        format!("Description: {}", entity.description()),
    ];

    match entity {
        Entity::Room(room) => {
            lines.push(format!("Exits: {}", list_with_keys(&room.exits())));
            lines.push(format!("Players: {}", list_with_keys(&room.players())));
        }
        Entity::Exit(exit) => lines.push(describe_exit_route(exit)),
        Entity::Player(player) => {
            lines.push(format!("Location: {}", player.location().display_with_key()));
            let state = if player.is_awake() { "awake" } else { "asleep" };
            lines.push(format!("Status: {state}"));
        }
    }
    lines
}

fn describe_exit_route(exit: &Exit) -> String {
    format!(
        "Source: {} Destination: {}",
        exit.source(),
        exit.destination().display_with_key()
    )
}

fn list_with_keys<T: Object>(items: &[Arc<T>]) -> String {
    if items.is_empty() {
        return "none".to_owned();
    }
    let names: Vec<String> = items.iter().map(|item| item.display_with_key()).collect();
    names.join(", ")
}
