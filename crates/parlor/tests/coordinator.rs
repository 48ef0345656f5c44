//! End-to-end tests for the coordinator: lobby movement, room routing,
//! disconnect teardown, and the cleanup sweep.

use std::sync::Arc;
use std::time::Duration;

use parlor::prelude::*;

fn sid(n: u64) -> SessionId {
    SessionId(n)
}

fn new_coordinator() -> Arc<Coordinator<TicTacToe>> {
    Arc::new(Coordinator::new(Arc::new(MemoryStore::new())))
}

/// Connects a session and returns its mailbox, drained of the initial
/// room list.
fn connect(coordinator: &Coordinator<TicTacToe>, id: u64, name: &str) -> Mailbox {
    let (sink, mut mail) = mailbox(DEFAULT_MAILBOX_CAPACITY);
    coordinator.connect(sid(id), name, sink);
    mail.drain();
    mail
}

fn room_list(events: &[Event]) -> Option<&Vec<RoomSummary>> {
    events.iter().rev().find_map(|e| match e {
        Event::RoomList { rooms } => Some(rooms),
        _ => None,
    })
}

// =========================================================================
// Lobby movement
// =========================================================================

#[test]
fn test_connect_lands_in_lobby_with_room_list() {
    let coordinator = new_coordinator();
    let (sink, mut mail) = mailbox(DEFAULT_MAILBOX_CAPACITY);

    coordinator.connect(sid(1), "ann", sink);

    assert!(coordinator.lobby().contains(sid(1)));
    assert!(matches!(mail.try_recv(), Some(Event::RoomList { rooms }) if rooms.is_empty()));
}

#[test]
fn test_join_room_moves_session_out_of_lobby() {
    let coordinator = new_coordinator();
    connect(&coordinator, 1, "ann");

    let role = coordinator.join_room(sid(1), "den");

    assert_eq!(role, Some(Role::PlayerX));
    assert!(!coordinator.lobby().contains(sid(1)));
    assert_eq!(coordinator.rooms().room_count(), 1);
}

#[test]
fn test_join_room_unknown_session_is_ignored() {
    let coordinator = new_coordinator();
    assert_eq!(coordinator.join_room(sid(42), "den"), None);
    assert_eq!(coordinator.rooms().room_count(), 0, "no room for nobody");
}

#[test]
fn test_lobby_sees_occupancy_change_on_join() {
    let coordinator = new_coordinator();
    connect(&coordinator, 1, "ann");
    let mut watcher = connect(&coordinator, 2, "bob");

    coordinator.join_room(sid(1), "den");

    let events = watcher.drain();
    let rooms = room_list(&events).expect("lobby should hear a room list");
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, RoomId::from("den"));
    assert_eq!(rooms[0].member_count, 1);
    assert_eq!(rooms[0].status, RoomStatus::Waiting);
}

#[test]
fn test_leave_room_returns_session_to_lobby() {
    let coordinator = new_coordinator();
    let mut mail = connect(&coordinator, 1, "ann");
    coordinator.join_room(sid(1), "den");
    mail.drain();

    coordinator.leave_room(sid(1), &RoomId::from("den"));

    assert!(coordinator.lobby().contains(sid(1)));
    let room = coordinator.rooms().get(&RoomId::from("den")).unwrap();
    assert_eq!(room.member_count(), 0);
    // Back in the lobby, the session gets a fresh room list — exactly one,
    // via the lobby broadcast.
    let lists = mail
        .drain()
        .iter()
        .filter(|e| matches!(e, Event::RoomList { .. }))
        .count();
    assert_eq!(lists, 1);
}

#[test]
fn test_explicit_create_orphans_in_room_sessions() {
    let coordinator = new_coordinator();
    connect(&coordinator, 1, "ann");
    let den = RoomId::from("den");
    coordinator.join_room(sid(1), "den");

    // An administrative reset replaces the room out from under ann.
    coordinator.rooms().create("den");

    // The fresh room never knew the session: it is not restored to the
    // lobby and leaves through disconnect instead.
    coordinator.leave_room(sid(1), &den);
    assert!(!coordinator.lobby().contains(sid(1)));
    assert_eq!(coordinator.rooms().get(&den).unwrap().member_count(), 0);

    coordinator.disconnect(sid(1));
    assert!(!coordinator.lobby().contains(sid(1)));
}

#[test]
fn test_leave_room_for_non_member_is_a_no_op() {
    let coordinator = new_coordinator();
    connect(&coordinator, 1, "ann");
    coordinator.join_room(sid(1), "den");

    // Session 2 never joined the room; nothing should change.
    coordinator.leave_room(sid(2), &RoomId::from("den"));
    let room = coordinator.rooms().get(&RoomId::from("den")).unwrap();
    assert_eq!(room.member_count(), 1);
}

// =========================================================================
// Command routing
// =========================================================================

#[test]
fn test_full_match_through_the_coordinator() {
    let coordinator = new_coordinator();
    let mut mail_a = connect(&coordinator, 1, "ann");
    let mut mail_b = connect(&coordinator, 2, "bob");
    let den = RoomId::from("den");

    assert_eq!(coordinator.join_room(sid(1), "den"), Some(Role::PlayerX));
    assert_eq!(coordinator.join_room(sid(2), "den"), Some(Role::PlayerO));
    mail_a.drain();
    mail_b.drain();

    // Top row for X.
    for (who, cell) in [(1, 0), (2, 3), (1, 1), (2, 4), (1, 2)] {
        assert!(coordinator.handle_move(sid(who), &den, cell));
    }
    assert!(!coordinator.handle_move(sid(2), &den, 5), "game is over");

    let events = mail_b.drain();
    let terminal = events
        .iter()
        .filter_map(|e| match e {
            Event::GameUpdate {
                is_over: true,
                winner,
                ..
            } => Some(*winner),
            _ => None,
        })
        .last();
    assert_eq!(terminal, Some(Some(Mark::X)));
}

#[test]
fn test_move_against_missing_room_is_refused() {
    let coordinator = new_coordinator();
    assert!(!coordinator.handle_move(sid(1), &RoomId::from("nowhere"), 0));
}

#[test]
fn test_chat_routes_and_drops_blank_text() {
    let coordinator = new_coordinator();
    connect(&coordinator, 1, "ann");
    let mut mail_b = connect(&coordinator, 2, "bob");
    let den = RoomId::from("den");
    coordinator.join_room(sid(1), "den");
    coordinator.join_room(sid(2), "den");
    mail_b.drain();

    assert!(!coordinator.chat(sid(1), &den, "   "));
    assert!(coordinator.chat(sid(1), &den, "  gg  "));

    let events = mail_b.drain();
    assert!(events.iter().any(|e| matches!(
        e,
        Event::Chat { sender, text } if sender == "ann" && text == "gg"
    )));
}

// =========================================================================
// Disconnect
// =========================================================================

#[test]
fn test_disconnect_removes_session_everywhere() {
    let coordinator = new_coordinator();
    connect(&coordinator, 1, "ann");
    let mut mail_b = connect(&coordinator, 2, "bob");
    coordinator.join_room(sid(1), "den");
    mail_b.drain();

    coordinator.disconnect(sid(1));

    assert!(!coordinator.lobby().contains(sid(1)));
    let room = coordinator.rooms().get(&RoomId::from("den")).unwrap();
    assert_eq!(room.member_count(), 0);

    // The lobby watcher hears the occupancy change.
    let events = mail_b.drain();
    let rooms = room_list(&events).expect("room list after disconnect");
    assert_eq!(rooms[0].member_count, 0);
}

#[test]
fn test_disconnect_from_lobby_only() {
    let coordinator = new_coordinator();
    connect(&coordinator, 1, "ann");

    coordinator.disconnect(sid(1));
    assert!(coordinator.lobby().is_empty());
    // A second disconnect for the same session is harmless.
    coordinator.disconnect(sid(1));
}

// =========================================================================
// Cleanup sweep
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_sweep_evicts_abandoned_rooms_and_refreshes_lobby() {
    let coordinator = new_coordinator();
    connect(&coordinator, 1, "ann");
    coordinator.join_room(sid(1), "den");
    coordinator.leave_room(sid(1), &RoomId::from("den"));
    assert_eq!(coordinator.rooms().room_count(), 1, "eviction waits for the sweep");

    let (sink, mut mail) = mailbox(DEFAULT_MAILBOX_CAPACITY);
    coordinator.connect(sid(2), "bob", sink);
    mail.drain();

    let sweep = spawn_sweep(coordinator.clone(), Duration::from_secs(30));
    // Past the first jittered tick (paused clock auto-advances).
    tokio::time::sleep(Duration::from_secs(40)).await;

    assert_eq!(coordinator.rooms().room_count(), 0);
    let events = mail.drain();
    let rooms = room_list(&events).expect("sweep should refresh the lobby");
    assert!(rooms.is_empty());

    sweep.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_sweep_spares_occupied_rooms() {
    let coordinator = new_coordinator();
    connect(&coordinator, 1, "ann");
    coordinator.join_room(sid(1), "den");

    let sweep = spawn_sweep(coordinator.clone(), Duration::from_secs(30));
    tokio::time::sleep(Duration::from_secs(100)).await;

    assert_eq!(coordinator.rooms().room_count(), 1);
    sweep.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_sweep_shutdown_stops_ticking() {
    let coordinator = new_coordinator();
    let sweep = spawn_sweep(coordinator.clone(), Duration::from_secs(30));
    sweep.shutdown().await;

    // A room abandoned after shutdown is never evicted.
    connect(&coordinator, 1, "ann");
    coordinator.join_room(sid(1), "den");
    coordinator.disconnect(sid(1));
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(coordinator.rooms().room_count(), 1);
}
