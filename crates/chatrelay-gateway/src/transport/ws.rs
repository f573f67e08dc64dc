//! WebSocket handler.
//!
//! Responsibilities:
//! - Upgrade HTTP -> WS
//! - Capture query parameters as handshake attributes
//! - Lifecycle: ping/pong + idle timeout
//! - Feed inbound frames to a `SessionHandler`, drain its outbound queue
//! - Report exactly one of close / transport error when the loop ends

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

use chatrelay_core::protocol::CloseReason;

use crate::app_state::AppState;
use crate::dispatch::SessionHandler;
use crate::realtime::{Session, SessionRef};
use crate::transport::handshake::HandshakeAttributes;
use crate::transport::idle::IdleTimer;
use crate::transport::session::WsSession;

/// How the session loop ended.
#[derive(Debug)]
enum SessionExit {
    Closed,
    TransportError(String),
}

fn close_frame(reason: CloseReason) -> Message {
    Message::Close(Some(CloseFrame {
        code: reason.code(),
        reason: reason.as_str().into(),
    }))
}

// --------------------
// Entry
// --------------------
pub async fn room_upgrade(
    State(app): State<AppState>,
    ws: WebSocketUpgrade,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let attrs = HandshakeAttributes::from_query(params);
    ws.on_upgrade(move |socket| async move {
        let handler: Arc<dyn SessionHandler> = app.chat();
        run_session(app, handler, attrs, socket).await;
    })
}

// --------------------
// Core session loop
// --------------------
async fn run_session(
    app: AppState,
    handler: Arc<dyn SessionHandler>,
    attrs: HandshakeAttributes,
    socket: WebSocket,
) {
    let gw = &app.cfg().gateway;
    let (out_tx, out_rx) = mpsc::channel::<String>(gw.outbound_queue);
    let session = Arc::new(WsSession::new(Uuid::new_v4().to_string(), out_tx));

    let span = tracing::info_span!("session", id = %session.id());
    let ping_every = Duration::from_millis(gw.ping_interval_ms);
    let idle_timeout = Duration::from_millis(gw.idle_timeout_ms);

    async move {
        let as_dyn: SessionRef = session.clone();
        handler.on_establish(&as_dyn, &attrs);

        let exit = drive(&session, &as_dyn, handler.as_ref(), socket, out_rx, ping_every, idle_timeout).await;
        tracing::debug!(?exit, "session loop ended");

        match exit {
            SessionExit::Closed => handler.on_close(&as_dyn),
            SessionExit::TransportError(e) => handler.on_transport_error(&as_dyn, &e),
        }
        session.mark_finished();
    }
    .instrument(span)
    .await
}

async fn drive(
    session: &WsSession,
    as_dyn: &SessionRef,
    handler: &dyn SessionHandler,
    socket: WebSocket,
    mut out_rx: mpsc::Receiver<String>,
    ping_every: Duration,
    idle_timeout: Duration,
) -> SessionExit {
    let (mut ws_tx, mut ws_rx) = socket.split();

    let mut ping_tick = tokio::time::interval(ping_every);
    ping_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut idle = IdleTimer::new(idle_timeout);

    loop {
        tokio::select! {
            // outbound writer
            maybe_out = out_rx.recv() => {
                let Some(text) = maybe_out else { return SessionExit::Closed; };
                if let Err(e) = ws_tx.send(Message::Text(text)).await {
                    return SessionExit::TransportError(e.to_string());
                }
            }

            // close requested by a handler
            reason = session.close_requested() => {
                tracing::debug!(code = reason.code(), "closing on request");
                let _ = ws_tx.send(close_frame(reason)).await;
                return SessionExit::Closed;
            }

            // inbound reader
            incoming = ws_rx.next() => {
                let Some(incoming) = incoming else { return SessionExit::Closed; };
                let msg = match incoming {
                    Ok(msg) => msg,
                    Err(e) => return SessionExit::TransportError(e.to_string()),
                };

                idle.touch();

                match msg {
                    Message::Text(text) => handler.on_text(as_dyn, &text),
                    Message::Binary(payload) => handler.on_binary(as_dyn, &payload),
                    Message::Ping(payload) => {
                        let _ = ws_tx.send(Message::Pong(payload)).await;
                    }
                    Message::Pong(_) => tracing::trace!("pong"),
                    Message::Close(frame) => {
                        tracing::debug!(?frame, "client closed");
                        return SessionExit::Closed;
                    }
                }
            }

            // ping
            _ = ping_tick.tick() => {
                if let Err(e) = ws_tx.send(Message::Ping(Vec::new())).await {
                    return SessionExit::TransportError(e.to_string());
                }
            }

            // idle timeout
            _ = idle.expired() => {
                tracing::info!("idle timeout");
                let _ = ws_tx.send(close_frame(CloseReason::Normal)).await;
                return SessionExit::Closed;
            }
        }
    }
}
