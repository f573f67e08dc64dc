//! Operational HTTP endpoints.
//!
//! - `/healthz`    : liveness
//! - `/chat/getSum` (alias `/chat/count`) : number of named connections, plain integer text (polled by the page)

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn online_count(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, state.registry().len().to_string())
}
