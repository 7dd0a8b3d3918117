//! Listener lifecycle.
//!
//! [`Server::bind`] opens the socket; [`Server::run_until`] accepts
//! connections, spawning one task per client, until the shutdown future
//! resolves. Connections already open keep running after that.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use hearth_core::DispatchTable;
use hearth_types::SessionId;
use hearth_world::World;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::connection;
use crate::error::ServerError;

/// State shared by every connection task.
#[derive(Debug)]
pub struct ServerState {
    /// The world all sessions act on.
    pub world: Arc<World>,
    /// The verb table.
    pub table: DispatchTable,
    /// Greeting sent to each new connection, one line at a time.
    pub banner: String,
}

/// A bound listener ready to serve.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    state: Arc<ServerState>,
    next_session: AtomicU64,
}

impl Server {
    /// Bind to the configured address.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the listener cannot bind.
    pub async fn bind(config: &ServerConfig, world: Arc<World>) -> Result<Self, ServerError> {
        let address = config.address();
        let bound = TcpListener::bind(address.as_str()).await;
        let listener = bound.map_err(|source| ServerError::Bind { address, source })?;

        let state = Arc::new(ServerState {
            world,
            table: DispatchTable::standard(),
            banner: config.banner.clone(),
        });
        Ok(Self {
            listener,
            state,
            next_session: AtomicU64::new(1),
        })
    }

    /// The address actually bound, useful when the configured port is 0.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Io`] if the socket cannot report it.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until `shutdown` resolves.
    ///
    /// A failed `accept` is logged and the loop continues.
    pub async fn run_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let addr = self.listener.local_addr().ok();
        info!(?addr, "hearth server listening");

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!("shutdown requested, no longer accepting connections");
                    break;
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => self.spawn_connection(stream, peer),
                    Err(err) => warn!(error = %err, "accept failed"),
                },
            }
        }
    }

    fn spawn_connection(&self, stream: tokio::net::TcpStream, peer: SocketAddr) {
        let id = SessionId(self.next_session.fetch_add(1, Ordering::Relaxed));
        let state = Arc::clone(&self.state);
        info!(session = %id, %peer, "connection accepted");

        tokio::spawn(async move {
            if let Err(err) = connection::handle_connection(stream, id, state).await {
                warn!(session = %id, error = %err, "connection ended with error");
            }
            info!(session = %id, "connection closed");
        });
    }
}
