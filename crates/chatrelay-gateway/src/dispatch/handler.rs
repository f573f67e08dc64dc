use crate::realtime::SessionRef;
use crate::transport::handshake::HandshakeAttributes;

/// Per-connection event sink driven by the transport loop.
///
/// The transport calls these in order for one connection (never concurrently
/// for the same session) and exactly one of `on_close` / `on_transport_error`
/// at the end. Implementations must not fail: errors are handled and logged
/// inside.
pub trait SessionHandler: Send + Sync {
    fn on_establish(&self, session: &SessionRef, attrs: &HandshakeAttributes) {
        let _ = (session, attrs);
    }

    fn on_text(&self, session: &SessionRef, text: &str);

    fn on_binary(&self, session: &SessionRef, payload: &[u8]) {
        tracing::debug!(session = %session.id(), len = payload.len(), "binary frame ignored");
    }

    fn on_close(&self, session: &SessionRef);

    fn on_transport_error(&self, session: &SessionRef, error: &str);
}
