//! chatrelay gateway binary.
//!
//! - Room WebSocket: /snake, /websocket (alias /room)
//! - Line protocol: `|name` to join, then plain text lines
//! - Tracing span per session
//! - Heartbeat ping + idle timeout

use tracing_subscriber::{fmt, EnvFilter};

use chatrelay_core::error::{RelayError, Result};
use chatrelay_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = config::config_path();
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "chatrelay-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| RelayError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| RelayError::Internal(format!("server failed: {e}")))
}
