use std::sync::{ Mutex, MutexGuard };
use super::ConversationView;
use crate::models::chat::{ ConversationTurn, Sender };

#[derive(Debug, Default)]
struct MemoryState {
    turns: Vec<ConversationTurn>,
    input: String,
    busy: bool,
}

/// View that keeps the conversation in memory. Used when embedding the
/// client in another UI and as the observable surface in tests.
#[derive(Debug, Default)]
pub struct MemoryView {
    state: Mutex<MemoryState>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replaces the contents of the input field, as typing would.
    pub fn set_input(&self, text: impl Into<String>) {
        self.lock().input = text.into();
    }

    pub fn input(&self) -> String {
        self.lock().input.clone()
    }

    pub fn turns(&self) -> Vec<ConversationTurn> {
        self.lock().turns.clone()
    }

    pub fn bot_texts(&self) -> Vec<String> {
        self.lock()
            .turns.iter()
            .filter(|t| t.sender == Sender::Bot)
            .map(|t| t.text.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().turns.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }
}

impl ConversationView for MemoryView {
    fn append(&self, turn: ConversationTurn) {
        self.lock().turns.push(turn);
    }

    fn clear_input(&self) {
        self.lock().input.clear();
    }

    fn clear(&self) {
        self.lock().turns.clear();
    }

    fn set_busy(&self, busy: bool) {
        self.lock().busy = busy;
    }
}
