use std::{
    fs,
    path::Path,
};

use super::{
    errors::AbhyasError,
    models::Card,
};

/// Extension used for exported decks. The payload itself is plain JSON,
/// so `.json` files import just as well.
pub const DECK_EXTENSION: &str = "flashcards";

/// Default file name offered by the export dialog.
pub const EXPORT_FILE_NAME: &str = "my-deck.flashcards";

pub fn serialize_deck(cards: &[Card]) -> Result<String, AbhyasError> {
    Ok(serde_json::to_string(cards)?)
}

pub fn deserialize_deck(contents: &str) -> Result<Vec<Card>, AbhyasError> {
    Ok(serde_json::from_str(contents)?)
}

pub fn export_deck(cards: &[Card], path: &Path) -> Result<(), AbhyasError> {
    let json = serialize_deck(cards)?;
    fs::write(path, json)?;
    println!("Deck exported to {}", path.display());
    Ok(())
}

/// Reads and parses a deck file. Parsing happens before anything is
/// merged, so a malformed file never leaves the deck half-updated.
pub fn import_deck(path: &Path) -> Result<Vec<Card>, AbhyasError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| AbhyasError::FailedToLoadFile(format!("{}: {}", path.display(), e)))?;

    deserialize_deck(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::default_deck;

    #[test]
    fn serialize_then_deserialize_round_trips() {
        let deck = default_deck();
        let json = serialize_deck(&deck).unwrap();
        assert_eq!(deserialize_deck(&json).unwrap(), deck);
    }

    #[test]
    fn round_trip_preserves_an_empty_deck() {
        let json = serialize_deck(&[]).unwrap();
        assert_eq!(deserialize_deck(&json).unwrap(), Vec::<Card>::new());
    }

    #[test]
    fn deserialize_accepts_the_wire_shape() {
        let cards = deserialize_deck(r#"[{"front":"a","back":"b"}]"#).unwrap();
        assert_eq!(cards, vec![Card::new("a", "b")]);
    }

    #[test]
    fn deserialize_rejects_malformed_content() {
        assert!(matches!(deserialize_deck("not json"), Err(AbhyasError::Json(_))));
        assert!(matches!(deserialize_deck(r#"{"front":"a"}"#), Err(AbhyasError::Json(_))));
    }

    #[test]
    fn export_then_import_round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        let deck = default_deck();
        export_deck(&deck, &path).unwrap();
        assert_eq!(import_deck(&path).unwrap(), deck);
    }

    #[test]
    fn import_of_a_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = import_deck(&dir.path().join("absent.flashcards"));
        assert!(matches!(result, Err(AbhyasError::FailedToLoadFile(_))));
    }
}
