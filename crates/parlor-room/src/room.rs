//! A room: one game instance, its member roster, and move arbitration.
//!
//! Membership and game state form one logical unit guarded by a single
//! `RwLock`. Mutating operations (`join`, `leave`, `handle_move`) take the
//! write lock; readers (`member_count`, `status`, `summary`) share the read
//! lock. No operation ever touches another room's lock, and everything a
//! lock guards is CPU-only — outbound delivery is a non-blocking mailbox
//! push — so hold times stay proportional to membership size.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use parlor_game::GameRules;
use parlor_protocol::{Event, Role, RoomId, RoomStatus, RoomSummary, SessionId};
use parlor_store::ScoreStore;

use crate::{assign_role, EventSink};

/// A member's seat inside a room.
struct Member {
    name: String,
    role: Role,
    sink: EventSink,
}

/// What `leave` hands back so the coordinator can return the session to
/// the lobby with its sink intact.
pub struct Departed {
    pub name: String,
    pub role: Role,
    pub sink: EventSink,
}

struct Inner<G> {
    members: HashMap<SessionId, Member>,
    game: G,
    /// Monotonic: set when the O seat is first filled, never cleared.
    /// A room whose players all walked away is still "started".
    started: bool,
}

/// One game room. Shared as `Arc<Room<G>>`; all methods take `&self`.
pub struct Room<G> {
    id: RoomId,
    store: Arc<dyn ScoreStore>,
    inner: RwLock<Inner<G>>,
}

impl<G: GameRules> Room<G> {
    pub(crate) fn new(id: RoomId, store: Arc<dyn ScoreStore>) -> Self {
        Self {
            id,
            store,
            inner: RwLock::new(Inner {
                members: HashMap::new(),
                game: G::new_game(),
                started: false,
            }),
        }
    }

    /// The room's id.
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Adds a session to the room and returns its seat.
    ///
    /// The seat comes from [`assign_role`] over live membership, so a
    /// vacated player seat goes to the next joiner even mid-game. Everyone
    /// present (joiner included) hears `MemberJoined`; the joiner alone
    /// gets `RoleAssigned`, plus the current `GameUpdate` snapshot when
    /// the room has already started. Joining never fails — full seats
    /// simply yield `Spectator`.
    pub fn join(&self, session: SessionId, name: &str, sink: EventSink) -> Role {
        let mut inner = self.inner.write().expect("room lock poisoned");

        let role = assign_role(inner.members.values().map(|m| m.role));
        inner.members.insert(
            session,
            Member {
                name: name.to_string(),
                role,
                sink: sink.clone(),
            },
        );

        if role == Role::PlayerO && !inner.started {
            inner.started = true;
            tracing::info!(room = %self.id, "both seats filled, game started");
        }

        tracing::info!(
            room = %self.id,
            %session,
            name,
            %role,
            members = inner.members.len(),
            "member joined"
        );

        broadcast(
            &inner,
            Event::MemberJoined {
                name: name.to_string(),
                role,
            },
        );
        sink.send(Event::RoleAssigned { role });
        if inner.started {
            sink.send(snapshot(&inner.game));
        }

        role
    }

    /// Removes a session if present; a no-op for non-members.
    ///
    /// Remaining members hear `MemberLeft`. The game is neither ended nor
    /// reset — `started` stays set and the board stands.
    pub fn leave(&self, session: SessionId) -> Option<Departed> {
        let mut inner = self.inner.write().expect("room lock poisoned");

        let member = inner.members.remove(&session)?;
        tracing::info!(
            room = %self.id,
            %session,
            name = %member.name,
            members = inner.members.len(),
            "member left"
        );

        broadcast(
            &inner,
            Event::MemberLeft {
                name: member.name.clone(),
            },
        );

        Some(Departed {
            name: member.name,
            role: member.role,
            sink: member.sink,
        })
    }

    /// Arbitrates one move. Returns `false` with no state change and no
    /// broadcast when the sender has no standing or the move is illegal:
    /// non-member, spectator, room not started, game already over, not the
    /// sender's turn, or the engine refuses the cell.
    ///
    /// On acceptance the win (if the move ended the game decisively) is
    /// recorded — after the room lock is released, so store I/O never
    /// extends the lock hold — then a fresh snapshot goes to every member
    /// present at move time.
    pub fn handle_move(&self, session: SessionId, cell: usize) -> bool {
        let (winner, recipients, update) = {
            let mut inner = self.inner.write().expect("room lock poisoned");

            let Some(member) = inner.members.get(&session) else {
                tracing::debug!(room = %self.id, %session, "move from non-member, ignoring");
                return false;
            };
            let Some(mark) = member.role.mark() else {
                return false;
            };
            if !inner.started || inner.game.is_over() {
                return false;
            }
            if mark != inner.game.current_turn() {
                tracing::debug!(room = %self.id, %session, "move out of turn, ignoring");
                return false;
            }

            if !inner.game.apply(cell) {
                tracing::debug!(room = %self.id, %session, cell, "engine rejected move");
                return false;
            }

            let winner = if inner.game.is_over() {
                self.resolve_winner(&inner)
            } else {
                None
            };
            let recipients: Vec<EventSink> =
                inner.members.values().map(|m| m.sink.clone()).collect();
            (winner, recipients, snapshot(&inner.game))
        };

        // The lock is gone by now: a slow store stalls only this move's
        // caller, never the room's other members.
        if let Some(name) = winner {
            if let Err(e) = self.store.record_win(&name) {
                tracing::warn!(room = %self.id, %name, error = %e, "failed to record win");
            } else {
                tracing::info!(room = %self.id, %name, "win recorded");
            }
        }

        for sink in &recipients {
            sink.send(update.clone());
        }
        true
    }

    /// Relays a chat line from a member, resolving their name from the
    /// roster. Returns `false` (and relays nothing) for non-members. Text
    /// policy (trimming, non-empty) belongs to the caller.
    pub fn chat_from(&self, session: SessionId, text: &str) -> bool {
        let inner = self.inner.read().expect("room lock poisoned");
        let Some(member) = inner.members.get(&session) else {
            return false;
        };
        broadcast(
            &inner,
            Event::Chat {
                sender: member.name.clone(),
                text: text.to_string(),
            },
        );
        true
    }

    /// Number of members (players + spectators).
    pub fn member_count(&self) -> usize {
        self.inner.read().expect("room lock poisoned").members.len()
    }

    /// Lifecycle status derived from game and `started` flag.
    pub fn status(&self) -> RoomStatus {
        status_of(&self.inner.read().expect("room lock poisoned"))
    }

    /// A listing row for this room.
    pub fn summary(&self) -> RoomSummary {
        let inner = self.inner.read().expect("room lock poisoned");
        RoomSummary {
            id: self.id.clone(),
            member_count: inner.members.len(),
            status: status_of(&inner),
        }
    }

    /// Names the member holding the winning mark, if the game ended
    /// decisively and that seat is still occupied. A winner who already
    /// disconnected forfeits the record; draws name nobody. Store failures
    /// at the caller are logged and swallowed — gameplay never rolls back
    /// over persistence.
    fn resolve_winner(&self, inner: &Inner<G>) -> Option<String> {
        let winning_mark = inner.game.winner()?;
        match inner
            .members
            .values()
            .find(|m| m.role.mark() == Some(winning_mark))
        {
            Some(winner) => Some(winner.name.clone()),
            None => {
                tracing::info!(room = %self.id, %winning_mark, "winner left before result, win not recorded");
                None
            }
        }
    }
}

fn status_of<G: GameRules>(inner: &Inner<G>) -> RoomStatus {
    if inner.game.is_over() {
        RoomStatus::Finished
    } else if inner.started {
        RoomStatus::Playing
    } else {
        RoomStatus::Waiting
    }
}

/// Pushes one event into every member's mailbox. Non-blocking.
fn broadcast<G>(inner: &Inner<G>, event: Event) {
    for member in inner.members.values() {
        member.sink.send(event.clone());
    }
}

/// Builds the current `GameUpdate` snapshot.
fn snapshot<G: GameRules>(game: &G) -> Event {
    Event::GameUpdate {
        board: game.board(),
        current_turn: game.current_turn(),
        is_over: game.is_over(),
        winner: game.winner(),
    }
}
