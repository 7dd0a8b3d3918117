//! Concurrency tests for the world graph.
//!
//! These drive the world from plain OS threads, the way connection tasks
//! hit it from a multi-threaded runtime, and check that movement never
//! deadlocks and that uniqueness checks hold under contention.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Barrier};
use std::thread;

use hearth_world::{Object, Room, World};

const ROUNDS: usize = 2_000;

fn assert_placement_consistent(world: &World) {
    let rooms = world.rooms();
    for player in world.players() {
        let holding: Vec<&Arc<Room>> = rooms
            .iter()
            .filter(|room| room.contains_player(player.key()))
            .collect();
        assert_eq!(holding.len(), 1, "{} is in {} rooms", player.name(), holding.len());
        assert_eq!(holding.first().map(|r| r.key()), Some(player.location().key()));
    }
}

#[test]
fn opposite_moves_over_the_same_rooms_do_not_deadlock() {
    let world = Arc::new(World::new());
    let east = world.create_room("East");
    let west = world.create_room("West");
    let bob = world.create_player("bob", "foo", &east).unwrap();
    let jim = world.create_player("jim", "foo", &west).unwrap();
    let barrier = Arc::new(Barrier::new(2));

    let spawn = |player: Arc<hearth_world::Player>, first: Arc<Room>, second: Arc<Room>| {
        let world = Arc::clone(&world);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..ROUNDS {
                world.move_player(&player, &first);
                world.move_player(&player, &second);
            }
        })
    };

    // bob travels west then east, jim the reverse.
    let a = spawn(Arc::clone(&bob), Arc::clone(&west), Arc::clone(&east));
    let b = spawn(Arc::clone(&jim), Arc::clone(&east), Arc::clone(&west));
    a.join().unwrap();
    b.join().unwrap();

    assert_eq!(bob.location().key(), east.key());
    assert_eq!(jim.location().key(), west.key());
    assert_eq!(east.player_count(), 1);
    assert_eq!(west.player_count(), 1);
    assert_placement_consistent(&world);
}

#[test]
fn racing_moves_of_one_player_leave_a_serial_outcome() {
    let world = Arc::new(World::new());
    let rooms: Vec<Arc<Room>> = (0..4).map(|i| world.create_room(&format!("Room {i}"))).collect();
    let bob = world.create_player("bob", "foo", rooms.first().unwrap()).unwrap();

    let handles: Vec<_> = rooms
        .iter()
        .map(|target| {
            let world = Arc::clone(&world);
            let bob = Arc::clone(&bob);
            let rooms = rooms.clone();
            let target = Arc::clone(target);
            thread::spawn(move || {
                for i in 0..ROUNDS {
                    let hop = rooms.get(i % rooms.len()).unwrap();
                    world.move_player(&bob, hop);
                    world.move_player(&bob, &target);
                }
            })
        })
        .collect();

    // A reader walks the rooms while the moves are in flight.
    let reader = {
        let world = Arc::clone(&world);
        thread::spawn(move || {
            for _ in 0..ROUNDS {
                for room in world.rooms() {
                    assert!(room.player_count() <= 1);
                }
            }
        })
    };

    for handle in handles {
        handle.join().unwrap();
    }
    reader.join().unwrap();

    let total: usize = rooms.iter().map(|r| r.player_count()).sum();
    assert_eq!(total, 1);
    assert_placement_consistent(&world);
}

#[test]
fn concurrent_signups_for_one_name_admit_exactly_one() {
    let world = Arc::new(World::new());
    let hall = world.create_room("The Hall");
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let world = Arc::clone(&world);
            let hall = Arc::clone(&hall);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let name = if i % 2 == 0 { "Bob" } else { "bOB" };
                world.create_player(name, "foo", &hall).is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(world.player_count(), 1);
    assert_eq!(hall.player_count(), 1);
}

#[test]
fn concurrent_exit_creation_keeps_names_unique() {
    let world = Arc::new(World::new());
    let hall = world.create_room("The Hall");
    let yard = world.create_room("The Yard");
    let barrier = Arc::new(Barrier::new(6));

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let world = Arc::clone(&world);
            let hall = Arc::clone(&hall);
            let yard = Arc::clone(&yard);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                world.create_exit(&hall, "gate", &yard, None).is_ok()
            })
        })
        .collect();

    let created = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(created, 1);
    assert_eq!(world.exit_count(), 1);
    assert_eq!(hall.exit_count(), 1);
}

#[test]
fn keys_stay_unique_under_mixed_creation() {
    let world = Arc::new(World::new());
    let hall = world.create_room("The Hall");

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let world = Arc::clone(&world);
            let hall = Arc::clone(&hall);
            thread::spawn(move || {
                let mut keys = Vec::new();
                for i in 0..100 {
                    let (room, exit) = world
                        .dig(&hall, &format!("exit-{t}-{i}"), &format!("Room {t}-{i}"), None)
                        .unwrap();
                    keys.push(room.key());
                    keys.push(exit.key());
                }
                keys
            })
        })
        .collect();

    let mut all: Vec<_> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    let count = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), count);
    assert_eq!(world.room_count(), 401);
    assert_eq!(world.exit_count(), 400);
}
