//! Bounded per-session mailboxes for outbound events.
//!
//! Every broadcast is fire-and-forget: the core pushes into a session's
//! mailbox with a non-blocking `try_send` and moves on. One consumer task
//! per session drains its [`Mailbox`] into the transport, which preserves
//! delivery order per recipient. A session that stops draining fills its
//! own mailbox and starts losing events; nobody else is affected.

use parlor_protocol::Event;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Default mailbox depth. Generous for a chat-and-moves workload; a
/// client this far behind is effectively gone.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 64;

/// Creates a linked sink/mailbox pair with the given capacity.
pub fn mailbox(capacity: usize) -> (EventSink, Mailbox) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSink { tx }, Mailbox { rx })
}

/// The delivery handle the core holds for one session.
///
/// Cheap to clone; all clones feed the same mailbox.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::Sender<Event>,
}

impl EventSink {
    /// Queues an event for the session. Never blocks.
    ///
    /// A full mailbox drops the event with a warning; a closed one (the
    /// session is tearing down) drops it silently.
    pub fn send(&self, event: Event) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(
                    event = event_name(&event),
                    "session mailbox full, dropping event"
                );
            }
            Err(TrySendError::Closed(_)) => {}
        }
    }

    /// `true` once the receiving side has gone away.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::RoomList { .. } => "RoomList",
        Event::MemberJoined { .. } => "MemberJoined",
        Event::MemberLeft { .. } => "MemberLeft",
        Event::RoleAssigned { .. } => "RoleAssigned",
        Event::GameUpdate { .. } => "GameUpdate",
        Event::Chat { .. } => "Chat",
    }
}

/// The receiving end of a session's mailbox.
///
/// Owned by the session's delivery task; there is exactly one per session.
#[derive(Debug)]
pub struct Mailbox {
    rx: mpsc::Receiver<Event>,
}

impl Mailbox {
    /// Waits for the next event. `None` once every sink clone is dropped.
    pub async fn recv(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Non-blocking receive, for polling and tests.
    pub fn try_recv(&mut self) -> Option<Event> {
        self.rx.try_recv().ok()
    }

    /// Drains everything currently queued.
    pub fn drain(&mut self) -> Vec<Event> {
        let mut out = Vec::new();
        while let Some(event) = self.try_recv() {
            out.push(event);
        }
        out
    }
}
