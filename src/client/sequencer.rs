use std::collections::BTreeMap;
use crate::models::chat::ConversationTurn;

/// Reorder buffer for submission-order delivery. Turns are accepted in any
/// order and released strictly by sequence number.
#[derive(Debug, Default)]
pub struct Sequencer {
    next: u64,
    held: BTreeMap<u64, ConversationTurn>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts the turn for `seq` and returns every turn that is now ready,
    /// in order. Returns nothing while an earlier sequence is still pending.
    pub fn accept(&mut self, seq: u64, turn: ConversationTurn) -> Vec<ConversationTurn> {
        if seq < self.next {
            // Already released.
            return Vec::new();
        }
        self.held.insert(seq, turn);

        let mut ready = Vec::new();
        while let Some(turn) = self.held.remove(&self.next) {
            ready.push(turn);
            self.next += 1;
        }
        ready
    }

    pub fn held(&self) -> usize {
        self.held.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(turns: Vec<ConversationTurn>) -> Vec<String> {
        turns.into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn in_order_turns_release_immediately() {
        let mut seq = Sequencer::new();
        assert_eq!(texts(seq.accept(0, ConversationTurn::bot("a"))), vec!["a"]);
        assert_eq!(texts(seq.accept(1, ConversationTurn::bot("b"))), vec!["b"]);
        assert_eq!(seq.held(), 0);
    }

    #[test]
    fn early_turns_wait_for_the_gap() {
        let mut seq = Sequencer::new();
        assert!(seq.accept(2, ConversationTurn::bot("c")).is_empty());
        assert!(seq.accept(1, ConversationTurn::bot("b")).is_empty());
        assert_eq!(seq.held(), 2);
        assert_eq!(texts(seq.accept(0, ConversationTurn::bot("a"))), vec!["a", "b", "c"]);
        assert_eq!(seq.held(), 0);
    }

    #[test]
    fn stale_sequence_is_dropped() {
        let mut seq = Sequencer::new();
        seq.accept(0, ConversationTurn::bot("a"));
        assert!(seq.accept(0, ConversationTurn::bot("again")).is_empty());
        assert_eq!(seq.held(), 0);
    }
}
