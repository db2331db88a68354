//! Binary entrypoint for the envlock HTTP server.
//!
//! Configuration comes from environment variables (see [`ServerConfig`]).
//! Log filtering follows `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::EnvFilter;

use envlock_server::config::{ConfigError, ServerConfig};
use envlock_server::router::build_router;
use envlock_server::state::AppState;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serve on {addr}: {source}")]
    Io {
        addr: String,
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.addr();
    if config.bot_id.is_none() {
        tracing::warn!("ENVLOCK_BOT_ID not set; chat events mentioning anyone will be handled");
    }

    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Io {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("envlock server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|source| StartupError::Io { addr, source })
}
