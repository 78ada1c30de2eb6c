use super::{
    models::Card,
    stats::StatsLog,
};

/// Transient cursor over the deck. Never persisted; a fresh session
/// starts at the first card, face down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub current_index: usize,
    pub revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Flip,
    Next,
    Prev,
}

impl SessionState {
    /// Pure transition function. The session is cyclic: Next past the
    /// last card wraps to the first, Prev before the first wraps to the
    /// last. With an empty deck every transition is the identity apart
    /// from the reveal flag.
    pub fn apply(self, event: SessionEvent, deck_len: usize) -> SessionState {
        match event {
            SessionEvent::Flip => {
                SessionState { current_index: self.current_index, revealed: !self.revealed }
            }
            SessionEvent::Next => {
                let current_index = match deck_len {
                    0 => self.current_index,
                    len => (self.current_index + 1) % len,
                };
                SessionState { current_index, revealed: false }
            }
            SessionEvent::Prev => {
                let current_index = match deck_len {
                    0 => self.current_index,
                    len => (self.current_index + len - 1) % len,
                };
                SessionState { current_index, revealed: false }
            }
        }
    }
}

/// Drives review over the deck's card sequence and emits grading
/// outcomes into the stats log.
#[derive(Debug, Default)]
pub struct ReviewSession {
    state: SessionState,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self { state: SessionState::default() }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn revealed(&self) -> bool {
        self.state.revealed
    }

    /// The card currently shown, if any. The stored index is clamped by
    /// modulo so a deck that grew or shrank underneath the session still
    /// resolves to a real card.
    pub fn current_card<'deck>(&self, cards: &'deck [Card]) -> Option<&'deck Card> {
        if cards.is_empty() {
            return None;
        }

        cards.get(self.state.current_index % cards.len())
    }

    pub fn flip(&mut self) {
        // Flip never touches the index, so the deck length is irrelevant.
        self.state = self.state.apply(SessionEvent::Flip, 0);
    }

    pub fn next(&mut self, deck_len: usize) {
        self.state = self.state.apply(SessionEvent::Next, deck_len);
    }

    pub fn prev(&mut self, deck_len: usize) {
        self.state = self.state.apply(SessionEvent::Prev, deck_len);
    }

    /// Self-grading: record the outcome, then advance to the next card.
    pub fn answer(&mut self, correct: bool, deck_len: usize, stats: &mut StatsLog) {
        stats.record(correct);
        self.next(deck_len);
    }
}
