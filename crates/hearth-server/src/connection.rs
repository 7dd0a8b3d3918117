//! One client connection.
//!
//! The socket is split in two. A writer task drains the session's
//! outbound channel onto the write half, so anything in the world may
//! `tell` the session without touching the socket. The read half is
//! driven here: one line in, one command dispatched, until the client
//! quits or goes away. Whatever the reason, the session's player is
//! disconnected from the world before this returns.

use std::sync::Arc;

use hearth_types::SessionId;
use hearth_world::{Object, Session};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

use crate::error::ServerError;
use crate::server::ServerState;

/// Longest accepted input line in bytes, excluding the line terminator.
pub const MAX_LINE_BYTES: usize = 4096;

/// Reply to an input line longer than [`MAX_LINE_BYTES`].
pub const LINE_TOO_LONG: &str = "That line is too long.";

/// One read from the client.
#[derive(Debug, PartialEq, Eq)]
enum Inbound {
    Line(String),
    TooLong,
    Eof,
}

/// Serve `stream` as session `id` until the client quits or disconnects.
///
/// # Errors
///
/// Returns [`ServerError::Io`] if reading from the socket fails. The
/// player has been disconnected either way.
pub async fn handle_connection(
    stream: TcpStream,
    id: SessionId,
    state: Arc<ServerState>,
) -> Result<(), ServerError> {
    let (read_half, mut write_half) = stream.into_split();
    let (session, mut outbound) = Session::channel(id);

    let writer = tokio::spawn(async move {
        while let Some(line) = outbound.recv().await {
            if write_half.write_all(line.as_bytes()).await.is_err() {
                break;
            }
        }
        if let Err(err) = write_half.shutdown().await {
            debug!(session = %id, error = %err, "socket shutdown failed");
        }
    });

    for line in state.banner.lines() {
        session.tell(line);
    }

    let mut reader = BufReader::new(read_half);
    let result = read_commands(&mut reader, &session, &state).await;

    if let Some(player) = state.world.disconnect(&session) {
        debug!(session = %id, player = %player.key(), "player released");
    }
    // The writer finishes once the last sender is gone.
    drop(session);
    if let Err(err) = writer.await {
        warn!(session = %id, error = %err, "writer task failed");
    }

    result
}

async fn read_commands<R>(
    reader: &mut R,
    session: &Arc<Session>,
    state: &ServerState,
) -> Result<(), ServerError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::with_capacity(256);
    loop {
        match next_line(reader, &mut buf).await? {
            Inbound::Eof => {
                info!(session = %session.id(), "client closed connection");
                return Ok(());
            }
            Inbound::TooLong => {
                debug!(session = %session.id(), "oversized line rejected");
                session.tell(LINE_TOO_LONG);
            }
            Inbound::Line(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                state.table.handle_line(&state.world, session, line);
                if session.quit_requested() {
                    info!(session = %session.id(), "client quit");
                    return Ok(());
                }
            }
        }
    }
}

/// Read one line, capping it at [`MAX_LINE_BYTES`].
///
/// An oversized line is consumed up to and including its terminator and
/// reported as [`Inbound::TooLong`]. Invalid UTF-8 is replaced rather
/// than rejected.
async fn next_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Inbound>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    // Room for the longest line plus CRLF.
    let limit = (MAX_LINE_BYTES + 2) as u64;
    let read = (&mut *reader).take(limit).read_until(b'\n', buf).await?;
    if read == 0 {
        return Ok(Inbound::Eof);
    }

    let mut line = buf.as_slice();
    if let Some(stripped) = line.strip_suffix(b"\n") {
        line = stripped.strip_suffix(b"\r").unwrap_or(stripped);
    } else if buf.len() > MAX_LINE_BYTES {
        discard_rest_of_line(reader).await?;
        return Ok(Inbound::TooLong);
    }
    if line.len() > MAX_LINE_BYTES {
        return Ok(Inbound::TooLong);
    }
    Ok(Inbound::Line(String::from_utf8_lossy(line).into_owned()))
}

async fn discard_rest_of_line<R>(reader: &mut R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut scratch = Vec::with_capacity(MAX_LINE_BYTES);
    loop {
        scratch.clear();
        let limit = MAX_LINE_BYTES as u64;
        let read = (&mut *reader).take(limit).read_until(b'\n', &mut scratch).await?;
        if read == 0 || scratch.last() == Some(&b'\n') {
            return Ok(());
        }
    }
}
