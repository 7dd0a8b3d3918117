//! Hearth server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `hearth-config.yaml`, or the path given as
//!    the first argument
//! 2. Initialize structured logging (tracing)
//! 3. Seed the starting world
//! 4. Bind the listener
//! 5. Serve until Ctrl-C

use std::path::PathBuf;
use std::sync::Arc;

use hearth_server::config::DEFAULT_CONFIG_PATH;
use hearth_server::{HearthConfig, Server, ServerError};
use hearth_world::{Object, World, create_starting_world};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // 1. Load configuration.
    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = HearthConfig::load(&path)?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        config = %path.display(),
        address = config.server.address(),
        "hearth-server starting"
    );

    // 3. Seed the starting world.
    let world = Arc::new(World::new());
    let seeded = create_starting_world(&world, &config.world.starting_world_options())?;
    match &seeded.wizard {
        Some(wizard) => info!(lobby = %seeded.lobby.key(), wizard = %wizard.key(), "starting world created"),
        None => warn!(lobby = %seeded.lobby.key(), "starting world created without a wizard"),
    }

    // 4. Bind.
    let server = Server::bind(&config.server, world).await?;

    // 5. Serve.
    server
        .run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = %err, "failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        })
        .await;

    info!("hearth-server shutdown complete");
    Ok(())
}
