pub mod cli;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod event;
pub mod pipe;
pub mod render;

use endpoint::PageLocation;
use event::{RenderOp, SocketEvent, ViewerState};
use render::OutputSink;

// ---------------------------------------------------------------------------
// ChannelViewer — connection state plus injected output sink
// ---------------------------------------------------------------------------

/// A viewer for one channel: the connection state machine wired to an output
/// sink. The location and the sink are injected, so the viewer can run
/// against a real terminal or an in-memory buffer alike.
pub struct ChannelViewer<S> {
    endpoint: String,
    state: ViewerState,
    sink: S,
}

impl<S: OutputSink> ChannelViewer<S> {
    /// Build a viewer for the channel at `location`, rendering into `sink`.
    /// The endpoint is computed once, here; it never changes afterwards.
    pub fn new(location: &PageLocation, sink: S) -> Self {
        ChannelViewer {
            endpoint: location.ws_endpoint(),
            state: ViewerState::new(),
            sink,
        }
    }

    /// The WebSocket endpoint this viewer connects to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    /// Feed one socket event through the state machine and apply the
    /// resulting render instructions to the sink.
    pub fn handle(&mut self, event: SocketEvent) {
        for op in self.state.apply(event) {
            match op {
                RenderOp::Append(payload) => self.sink.append(&payload),
                RenderOp::Alert(notice) => self.sink.alert(&notice),
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Tear the viewer apart and hand the sink back.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
