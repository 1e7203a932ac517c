use log::warn;
use std::io::{ self, Write };
use std::sync::Mutex;
use super::ConversationView;
use crate::models::chat::ConversationTurn;

const BUSY_MARKER: &str = "...";
const CLEARED_MARKER: &str = "--- conversation cleared ---";

/// Line-oriented view: every turn is written as `You: <text>` or
/// `Bot: <text>` to the wrapped writer.
pub struct TerminalView<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> ConversationView for TerminalView<W> {
    fn append(&self, turn: ConversationTurn) {
        self.write_line(&turn.to_string());
    }

    // The prompt line is consumed on submit.
    fn clear_input(&self) {}

    fn clear(&self) {
        self.write_line(CLEARED_MARKER);
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            self.write_line(BUSY_MARKER);
        }
    }
}
