//! The viewer loop: one WebSocket connection, frames translated to
//! [`SocketEvent`]s. No retries, no timeout; a failure of any kind is
//! terminal, exactly like the page-embedded viewer this replaces.

use futures_util::StreamExt;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::debug;

use crate::endpoint::PageLocation;
use crate::error::NetpipeError;
use crate::event::SocketEvent;
use crate::render::OutputSink;
use crate::ChannelViewer;

/// Watch the channel at `location`, rendering everything into `sink` until
/// the connection ends.
///
/// Connection notices ("failed to connect", "channel is closed", ...) are
/// rendered through the sink; the returned error only signals the exit
/// status to the caller.
pub async fn view<S: OutputSink>(
    location: &PageLocation,
    sink: S,
) -> Result<(), NetpipeError> {
    let mut viewer = ChannelViewer::new(location, sink);
    let endpoint = viewer.endpoint().to_string();
    debug!(%endpoint, "connecting");

    let (mut ws, _response) = match connect_async(&endpoint).await {
        Ok(pair) => pair,
        Err(source) => {
            viewer.handle(SocketEvent::Error(Some(source.to_string())));
            return Err(NetpipeError::Connect { endpoint, source });
        }
    };
    viewer.handle(SocketEvent::Opened);
    debug!(channel = location.channel_id(), "connected");

    while let Some(frame) = ws.next().await {
        match frame {
            Ok(Message::Text(text)) => viewer.handle(SocketEvent::Message(text)),
            Ok(Message::Close(_)) => {
                viewer.handle(SocketEvent::Closed);
                return Ok(());
            }
            // The channel protocol is untyped text frames; everything else
            // (binary, ping, pong) is transport noise.
            Ok(_) => {}
            Err(err) => {
                viewer.handle(SocketEvent::Error(Some(err.to_string())));
                return Err(NetpipeError::Socket(err));
            }
        }
    }

    // Stream ended without a close frame; same outcome for the user.
    viewer.handle(SocketEvent::Closed);
    Ok(())
}
