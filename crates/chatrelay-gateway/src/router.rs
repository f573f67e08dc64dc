//! Axum router wiring (HTTP -> WS upgrade).
//!
//! - `/snake`, `/websocket`, `/room` : chat room WebSocket
//! - `/chat/getSum`, `/chat/count`   : registered-connection count
//! - `/healthz`                      : liveness

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/snake", get(transport::ws::room_upgrade))
        .route("/websocket", get(transport::ws::room_upgrade))
        .route("/room", get(transport::ws::room_upgrade))
        .route("/chat/getSum", get(ops::online_count))
        .route("/chat/count", get(ops::online_count))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
