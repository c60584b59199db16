//! Output sinks: where render instructions land.

use std::io::{self, Write};

use colored::*;

use crate::event::Notice;

/// The output region a viewer writes into. Append-only; the viewer never
/// reads it back.
pub trait OutputSink {
    /// Append a message payload to the output region.
    fn append(&mut self, payload: &str);

    /// Surface a connection notice in the alert region.
    fn alert(&mut self, notice: &Notice);
}

/// Remove terminal control sequences from a payload, keeping ordinary
/// whitespace. Channel payloads are opaque text from the network; by default
/// they are not allowed to move the cursor or restyle the terminal.
pub fn sanitize(payload: &str) -> String {
    payload
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
        .collect()
}

/// Sink that prints payloads to stdout and notices to stderr.
pub struct TerminalSink {
    /// Pass payloads through untouched instead of stripping control
    /// sequences.
    raw: bool,
}

impl TerminalSink {
    pub fn new(raw: bool) -> Self {
        TerminalSink { raw }
    }
}

impl OutputSink for TerminalSink {
    fn append(&mut self, payload: &str) {
        if self.raw {
            print!("{}", payload);
        } else {
            print!("{}", sanitize(payload));
        }
        let _ = io::stdout().flush();
    }

    fn alert(&mut self, notice: &Notice) {
        let text = notice.text();
        match notice {
            Notice::ChannelClosed => eprintln!("{}", text.yellow()),
            _ => eprintln!("{}", text.bright_red()),
        }
    }
}

/// In-memory sink, for tests and for embedding the viewer without a
/// terminal.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub payloads: Vec<String>,
    pub notices: Vec<Notice>,
}

impl BufferSink {
    pub fn new() -> Self {
        BufferSink::default()
    }
}

impl OutputSink for BufferSink {
    fn append(&mut self, payload: &str) {
        self.payloads.push(payload.to_string());
    }

    fn alert(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
