//! Per-connection session state.
//!
//! A [`Session`] is the thin carrier between a client connection and the
//! world: it knows which player (if any) it has authenticated as, whether
//! the client asked to quit, and how to deliver text back to the client.
//!
//! Output goes through an unbounded channel drained by the connection's
//! writer task. Each [`Session::tell`] enqueues one complete line, so two
//! messages to the same recipient never interleave.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use hearth_types::SessionId;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::trace;

use crate::object::Object;
use crate::player::Player;

/// Line terminator for every outbound message.
pub const LINE_ENDING: &str = "\r\n";

/// One client connection's view of the world.
pub struct Session {
    id: SessionId,
    outbound: mpsc::UnboundedSender<String>,
    /// Authenticated player. Leaf lock: nothing else is acquired while held.
    player: Mutex<Option<Arc<Player>>>,
    quit_requested: AtomicBool,
}

impl Session {
    /// Create a session that writes into `outbound`.
    pub const fn new(id: SessionId, outbound: mpsc::UnboundedSender<String>) -> Self {
        Self {
            id,
            outbound,
            player: Mutex::new(None),
            quit_requested: AtomicBool::new(false),
        }
    }

    /// Create a session together with the receiving end of its output.
    pub fn channel(id: SessionId) -> (Arc<Self>, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self::new(id, tx)), rx)
    }

    /// Connection identifier.
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Deliver one line of text to the client, appending CRLF.
    ///
    /// A closed connection drops the message silently.
    pub fn tell(&self, message: &str) {
        let mut line = String::with_capacity(message.len().saturating_add(LINE_ENDING.len()));
        line.push_str(message);
        line.push_str(LINE_ENDING);
        if self.outbound.send(line).is_err() {
            trace!(session = %self.id, "dropping output for closed connection");
        }
    }

    /// The authenticated player, if any.
    pub fn player(&self) -> Option<Arc<Player>> {
        self.player.lock().clone()
    }

    /// Whether a player is attached.
    pub fn is_authenticated(&self) -> bool {
        self.player.lock().is_some()
    }

    /// Ask the connection loop to close after the current command.
    pub fn request_quit(&self) {
        self.quit_requested.store(true, Ordering::Release);
    }

    /// Whether a quit was requested.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested.load(Ordering::Acquire)
    }

    pub(crate) fn attach(&self, player: Arc<Player>) {
        *self.player.lock() = Some(player);
    }

    pub(crate) fn detach(&self) -> Option<Arc<Player>> {
        self.player.lock().take()
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let player = self
            .player
            .try_lock()
            .and_then(|p| p.as_ref().map(|p| p.key()));
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("player", &player)
            .field("quit_requested", &self.quit_requested())
            .finish_non_exhaustive()
    }
}
