/// Why the server closes a connection. Maps onto WebSocket close codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseReason {
    /// 1000: normal closure.
    #[default]
    Normal,
    /// 1007: the client sent data the protocol does not accept.
    BadData,
    /// 1011: the server hit an unexpected condition.
    ServerError,
}

impl CloseReason {
    /// RFC 6455 status code.
    pub fn code(self) -> u16 {
        match self {
            CloseReason::Normal => 1000,
            CloseReason::BadData => 1007,
            CloseReason::ServerError => 1011,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CloseReason::Normal => "normal",
            CloseReason::BadData => "bad data",
            CloseReason::ServerError => "server error",
        }
    }
}
