//! The publishing side: create a channel, run a command, and stream its
//! output into the channel line by line.
//!
//! ## Design
//! - stdout and stderr are pumped concurrently, each on its own task, into
//!   one mpsc channel; the WebSocket writer is the only consumer.
//! - Every line is echoed locally as well, so the terminal still behaves
//!   like the command was run directly.
//! - Ctrl-C sends a close frame and gives the server a moment to react
//!   before the process exits.

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use colored::*;
use futures_util::SinkExt;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::debug;

use crate::endpoint::PageLocation;
use crate::error::NetpipeError;

/// A channel as returned by the create endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Ask the server for a fresh channel.
pub async fn create_channel(location: &PageLocation) -> Result<Channel, NetpipeError> {
    let url = location.create_endpoint();
    debug!(%url, "creating channel");
    let body = reqwest::get(&url).await?.error_for_status()?.text().await?;
    let channel: Channel = serde_json::from_str(&body)?;
    Ok(channel)
}

/// Create a channel and pipe the output of `argv` into it.
///
/// Prints the shareable page URL, then streams a `$ cmd args` header line
/// followed by every stdout/stderr line of the command as one text frame
/// each.
pub async fn run(location: &PageLocation, argv: &[String]) -> Result<(), NetpipeError> {
    let (bin, args) = argv.split_first().ok_or(NetpipeError::MissingCommand)?;

    let channel = create_channel(location).await?;
    println!(
        "New channel created: {}\n",
        location.channel_page(&channel.id).bold()
    );

    let endpoint =
        PageLocation::new(&location.host, format!("/{}", channel.id), location.secure)
            .ws_endpoint();
    let (mut ws, _response) = connect_async(&endpoint)
        .await
        .map_err(|source| NetpipeError::Connect {
            endpoint: endpoint.clone(),
            source,
        })?;
    debug!(%endpoint, "connected");

    let mut child = Command::new(bin)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                NetpipeError::CommandNotFound(bin.clone())
            } else {
                NetpipeError::Io(err)
            }
        })?;

    let stdout = child.stdout.take().expect("stdout is piped");
    let stderr = child.stderr.take().expect("stderr is piped");

    let (tx, mut rx) = mpsc::channel::<String>(64);
    tokio::spawn(pump_lines(stdout, tx.clone()));
    tokio::spawn(pump_lines(stderr, tx));

    ws.send(Message::Text(format!("$ {}\n", argv.join(" ")))).await?;

    loop {
        tokio::select! {
            line = rx.recv() => match line {
                Some(line) => ws.send(Message::Text(line)).await?,
                // Both pumps are done: the command has no more output.
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupt");
                ws.close(None).await?;
                tokio::time::sleep(Duration::from_secs(1)).await;
                return Ok(());
            }
        }
    }

    let status = child.wait().await?;
    debug!(%status, "command finished");
    if !status.success() {
        let line = format!("{}\n", status);
        eprintln!("{}", line.trim_end().bright_red());
        ws.send(Message::Text(line)).await?;
    }

    ws.close(None).await?;
    Ok(())
}

/// Forward `reader` to `tx` line by line, echoing each line locally. Stops
/// on read error or when the consumer goes away.
async fn pump_lines<R>(reader: R, tx: mpsc::Sender<String>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = LinesStream::new(BufReader::new(reader).lines());
    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(_) => return,
        };
        println!("{}", line);
        if tx.send(format!("{}\n", line)).await.is_err() {
            return;
        }
    }
}
