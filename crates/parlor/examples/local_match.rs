//! Drives a full match through the coordinator with in-process mailboxes:
//! two players and one spectator join a room, X wins on the diagonal, and
//! the league is printed at the end.
//!
//! Run with `cargo run --example local_match`.

use std::sync::Arc;
use std::time::Duration;

use parlor::prelude::*;

fn render(board: &Board) -> String {
    let cell = |c: &Option<Mark>| match c {
        Some(m) => m.to_string(),
        None => ".".to_string(),
    };
    board
        .chunks(3)
        .map(|row| row.iter().map(cell).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn show(who: &str, mail: &mut Mailbox) {
    for event in mail.drain() {
        match event {
            Event::GameUpdate {
                board,
                current_turn,
                is_over,
                winner,
            } => {
                println!("[{who}]\n{}", render(&board));
                if is_over {
                    match winner {
                        Some(mark) => println!("[{who}] {mark} wins"),
                        None => println!("[{who}] draw"),
                    }
                } else {
                    println!("[{who}] {current_turn} to move");
                }
            }
            Event::MemberJoined { name, role } => {
                println!("[{who}] {name} joined as {role}");
            }
            Event::RoleAssigned { role } => println!("[{who}] seated as {role}"),
            Event::Chat { sender, text } => println!("[{who}] <{sender}> {text}"),
            other => println!("[{who}] {other:?}"),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store = Arc::new(MemoryStore::new());
    let coordinator = Arc::new(Coordinator::<TicTacToe>::new(store.clone()));
    let sweep = spawn_sweep(coordinator.clone(), Duration::from_secs(30));

    let (ann, bob, eve) = (SessionId(1), SessionId(2), SessionId(3));
    let (sink_a, mut mail_a) = mailbox(DEFAULT_MAILBOX_CAPACITY);
    let (sink_b, mut mail_b) = mailbox(DEFAULT_MAILBOX_CAPACITY);
    let (sink_e, mut mail_e) = mailbox(DEFAULT_MAILBOX_CAPACITY);
    coordinator.connect(ann, "ann", sink_a);
    coordinator.connect(bob, "bob", sink_b);
    coordinator.connect(eve, "eve", sink_e);

    let den = RoomId::from("den");
    coordinator.join_room(ann, "den");
    coordinator.join_room(bob, "den");
    coordinator.join_room(eve, "den");

    coordinator.chat(ann, &den, "good luck!");

    // X takes the diagonal.
    for (who, cell) in [(ann, 0), (bob, 1), (ann, 4), (bob, 2), (ann, 8)] {
        coordinator.handle_move(who, &den, cell);
    }

    show("ann", &mut mail_a);
    show("bob", &mut mail_b);
    show("eve", &mut mail_e);

    println!("\nleague:");
    match store.league() {
        Ok(league) => {
            for entry in league {
                println!("  {} — {} wins", entry.name, entry.wins);
            }
        }
        Err(err) => eprintln!("league unavailable: {err}"),
    }

    sweep.shutdown().await;
}
