pub mod memory;
pub mod terminal;

use crate::models::chat::ConversationTurn;

pub use self::memory::MemoryView;
pub use self::terminal::TerminalView;

/// Rendering seam of the chat client: the message list, the input field and
/// the busy indicator. Implementations are only ever appended to; a newly
/// appended turn is expected to be scrolled into view.
pub trait ConversationView: Send + Sync {
    fn append(&self, turn: ConversationTurn);

    fn clear_input(&self);

    /// Removes every rendered turn.
    fn clear(&self);

    fn set_busy(&self, _busy: bool) {}
}
