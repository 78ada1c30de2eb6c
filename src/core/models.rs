use serde::{
    Deserialize,
    Serialize,
};

/// One fact to memorize. Identity is positional within the deck,
/// so there is no id field and cards are never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Card { front: front.into(), back: back.into() }
    }

    /// Trims both faces and rejects cards where either side is empty.
    pub fn validated(front: &str, back: &str) -> Option<Self> {
        let front = front.trim();
        let back = back.trim();

        if front.is_empty() || back.is_empty() {
            return None;
        }

        Some(Card::new(front, back))
    }
}

pub const PRELOADED: &[(&str, &str)] = &[
    ("नमस्ते", "Hello"),
    ("पानी", "Water"),
    ("पुस्तक", "Book"),
    ("खिड़की", "Window"),
    ("कितना", "How much?"),
    ("क्या", "What?"),
    ("सूरज", "Sun"),
    ("बिल्ली", "Cat"),
    ("आदमी", "Man"),
    ("खुश", "Happy"),
];

/// The starter deck used whenever no saved deck can be read.
pub fn default_deck() -> Vec<Card> {
    PRELOADED.iter().map(|(front, back)| Card::new(*front, *back)).collect()
}
