use std::path::PathBuf;

use super::models::{
    default_deck,
    Card,
};
use crate::persistence::{
    data_file_path,
    load_json,
    save_json,
    DECK_FILE,
};

/// Owns the ordered card list and its saved representation. Every
/// mutation writes the whole deck back to disk, so the file is always
/// a complete snapshot.
#[derive(Debug)]
pub struct DeckStore {
    cards: Vec<Card>,
    file_path: PathBuf,
}

impl DeckStore {
    /// Loads the saved deck, substituting the starter deck when the file
    /// is absent or unreadable. Never fails.
    pub fn load() -> Self {
        Self::load_from(data_file_path(DECK_FILE))
    }

    pub fn load_from(file_path: PathBuf) -> Self {
        let cards = match load_json::<Vec<Card>>(&file_path) {
            Ok(cards) => cards,
            Err(e) => {
                eprintln!("No saved deck ({}). Starting with the default deck.", e);
                default_deck()
            }
        };

        Self { cards, file_path }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Validates and prepends a new card. Returns false (and leaves the
    /// deck untouched) when either face is empty after trimming.
    pub fn prepend(&mut self, front: &str, back: &str) -> bool {
        match Card::validated(front, back) {
            Some(card) => {
                self.cards.insert(0, card);
                self.save();
                true
            }
            None => false,
        }
    }

    /// Prepends an imported sequence ahead of the existing cards,
    /// keeping the imported order intact. No deduplication.
    pub fn merge(&mut self, imported: Vec<Card>) {
        if imported.is_empty() {
            return;
        }

        let existing = std::mem::take(&mut self.cards);
        self.cards = imported;
        self.cards.extend(existing);
        self.save();
    }

    fn save(&self) {
        if let Err(e) = save_json(&self.cards, &self.file_path) {
            eprintln!("Failed to save deck to {}: {}", self.file_path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::PRELOADED;

    fn store_in(dir: &tempfile::TempDir) -> DeckStore {
        DeckStore::load_from(dir.path().join(DECK_FILE))
    }

    #[test]
    fn missing_file_yields_default_deck() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.len(), 10);
        for (card, (front, back)) in store.cards().iter().zip(PRELOADED) {
            assert_eq!(card.front, *front);
            assert_eq!(card.back, *back);
        }
    }

    #[test]
    fn corrupted_file_yields_default_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DECK_FILE);
        std::fs::write(&path, "]][[ definitely not a deck").unwrap();

        let store = DeckStore::load_from(path);
        assert_eq!(store.cards(), default_deck().as_slice());
    }

    #[test]
    fn prepend_writes_through_and_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(store.prepend("घर", "House"));
        assert_eq!(store.cards()[0], Card::new("घर", "House"));

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.cards(), store.cards());
    }

    #[test]
    fn prepend_trims_both_faces() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(store.prepend("  घर  ", " House "));
        assert_eq!(store.cards()[0], Card::new("घर", "House"));
    }

    #[test]
    fn blank_front_is_a_silent_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let before = store.cards().to_vec();

        assert!(!store.prepend("   ", "x"));
        assert!(!store.prepend("x", ""));
        assert_eq!(store.cards(), before.as_slice());
    }

    #[test]
    fn merge_prepends_preserving_imported_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DECK_FILE);
        save_json(&vec![Card::new("c", "d")], &path).unwrap();

        let mut store = DeckStore::load_from(path);
        store.merge(vec![Card::new("a", "b")]);

        assert_eq!(store.cards(), &[Card::new("a", "b"), Card::new("c", "d")]);
    }

    #[test]
    fn merge_of_nothing_does_not_rewrite_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.merge(Vec::new());

        // Nothing was mutated, so nothing was written.
        assert!(!dir.path().join(DECK_FILE).exists());
    }
}
