//! The pure viewer core: socket lifecycle events in, render instructions out.
//!
//! ## Design
//! - [`ViewerState`] holds the single piece of mutable state (the `connected`
//!   flag, flipped false→true exactly once on open).
//! - [`ViewerState::apply`] maps an event to zero or more [`RenderOp`]s
//!   without touching any output device, so the whole state machine is
//!   testable without a socket or a terminal.
//! - A separate sink (see [`crate::render`]) applies the instructions.
//!
//! ## Guarantees
//! - Message payloads come back out in arrival order, none dropped or
//!   duplicated.
//! - An error before the open event is reported as a connection failure; an
//!   error after it carries the transport's own description.
//! - Every failure is terminal: the core never asks for a reconnect.

/// A socket lifecycle event, as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketEvent {
    /// The connection was established.
    Opened,
    /// A text frame arrived. The payload is opaque.
    Message(String),
    /// The transport reported an error, with its description when available.
    Error(Option<String>),
    /// The connection closed (close frame or end of stream).
    Closed,
}

/// A user-facing notice about the connection, rendered into the alert region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The socket never opened.
    ConnectFailed,
    /// The socket errored after opening; carries the error description.
    SocketError(String),
    /// The channel is closed; no more messages will arrive.
    ChannelClosed,
}

impl Notice {
    /// The fixed human-readable text for this notice.
    pub fn text(&self) -> String {
        match self {
            Notice::ConnectFailed => "Error: failed to connect".to_string(),
            Notice::SocketError(detail) => format!("Error: {}", detail),
            Notice::ChannelClosed => "Channel is closed".to_string(),
        }
    }
}

/// One render instruction for the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Append a message payload to the output region.
    Append(String),
    /// Surface a notice in the alert region.
    Alert(Notice),
}

/// The viewer's connection state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewerState {
    connected: bool,
}

impl ViewerState {
    pub fn new() -> Self {
        ViewerState::default()
    }

    /// Whether the open event has been seen.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Advance the state machine by one event and return the render
    /// instructions it produces.
    pub fn apply(&mut self, event: SocketEvent) -> Vec<RenderOp> {
        match event {
            SocketEvent::Opened => {
                self.connected = true;
                Vec::new()
            }
            SocketEvent::Message(payload) => vec![RenderOp::Append(payload)],
            SocketEvent::Error(detail) => {
                let notice = if self.connected {
                    Notice::SocketError(detail.unwrap_or_else(|| "unknown".to_string()))
                } else {
                    Notice::ConnectFailed
                };
                vec![RenderOp::Alert(notice)]
            }
            SocketEvent::Closed => vec![RenderOp::Alert(Notice::ChannelClosed)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_sets_connected_and_renders_nothing() {
        let mut state = ViewerState::new();
        assert!(!state.is_connected());
        let ops = state.apply(SocketEvent::Opened);
        assert!(ops.is_empty());
        assert!(state.is_connected());
    }

    #[test]
    fn test_message_appends_payload() {
        let mut state = ViewerState::new();
        state.apply(SocketEvent::Opened);
        let ops = state.apply(SocketEvent::Message("hello\n".to_string()));
        assert_eq!(ops, vec![RenderOp::Append("hello\n".to_string())]);
    }

    #[test]
    fn test_messages_preserve_arrival_order() {
        let mut state = ViewerState::new();
        state.apply(SocketEvent::Opened);
        let mut seen = Vec::new();
        for payload in ["a", "b", "c"] {
            for op in state.apply(SocketEvent::Message(payload.to_string())) {
                if let RenderOp::Append(p) = op {
                    seen.push(p);
                }
            }
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_error_before_open_is_connect_failure() {
        let mut state = ViewerState::new();
        let ops = state.apply(SocketEvent::Error(Some("refused".to_string())));
        assert_eq!(ops, vec![RenderOp::Alert(Notice::ConnectFailed)]);
    }

    #[test]
    fn test_error_after_open_carries_detail() {
        let mut state = ViewerState::new();
        state.apply(SocketEvent::Opened);
        let ops = state.apply(SocketEvent::Error(Some("reset by peer".to_string())));
        assert_eq!(
            ops,
            vec![RenderOp::Alert(Notice::SocketError("reset by peer".to_string()))]
        );
    }

    #[test]
    fn test_error_after_open_without_detail() {
        let mut state = ViewerState::new();
        state.apply(SocketEvent::Opened);
        let ops = state.apply(SocketEvent::Error(None));
        assert_eq!(
            ops,
            vec![RenderOp::Alert(Notice::SocketError("unknown".to_string()))]
        );
    }

    #[test]
    fn test_close_after_open_renders_channel_closed() {
        let mut state = ViewerState::new();
        state.apply(SocketEvent::Opened);
        let ops = state.apply(SocketEvent::Closed);
        assert_eq!(ops, vec![RenderOp::Alert(Notice::ChannelClosed)]);
    }

    #[test]
    fn test_connected_flips_once() {
        let mut state = ViewerState::new();
        state.apply(SocketEvent::Opened);
        state.apply(SocketEvent::Opened);
        assert!(state.is_connected());
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(Notice::ConnectFailed.text(), "Error: failed to connect");
        assert_eq!(Notice::SocketError("x".into()).text(), "Error: x");
        assert_eq!(Notice::ChannelClosed.text(), "Channel is closed");
    }
}
