//! Card store
//!
//! Holds the session's card set in insertion order with a term index for
//! uniqueness checks and lookups.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{FlashcardError, FlashcardResult};
use crate::models::Card;

use super::file_io::{read_cards, write_cards};

/// In-memory collection of cards keyed by term
#[derive(Debug, Default, Clone)]
pub struct CardStore {
    cards: Vec<Card>,
    /// Index: term -> position in `cards`
    by_term: HashMap<String, usize>,
}

impl CardStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new card with no mistakes
    ///
    /// Fails if the term is taken, then if the definition is taken.
    pub fn add(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> FlashcardResult<()> {
        let term = term.into();
        let definition = definition.into();

        if self.contains_term(&term) {
            return Err(FlashcardError::DuplicateTerm { term });
        }
        if self.term_for_definition(&definition).is_some() {
            return Err(FlashcardError::DuplicateDefinition { definition });
        }

        debug!(term = %term, "adding card");
        self.push(Card::new(term, definition));
        Ok(())
    }

    /// Remove the card with the given term
    pub fn remove(&mut self, term: &str) -> FlashcardResult<()> {
        let idx = self
            .by_term
            .remove(term)
            .ok_or_else(|| FlashcardError::card_not_found(term))?;

        self.cards.remove(idx);
        for position in self.by_term.values_mut() {
            if *position > idx {
                *position -= 1;
            }
        }

        debug!(term = %term, "removed card");
        Ok(())
    }

    /// Set every card's mistake count to zero
    pub fn reset_stats(&mut self) {
        self.cards.iter_mut().for_each(Card::reset_mistakes);
    }

    /// All cards sharing the highest non-zero mistake count, in insertion order
    pub fn hardest_cards(&self) -> Vec<&Card> {
        let max = match self.cards.iter().map(|c| c.mistakes).max() {
            Some(max) if max > 0 => max,
            _ => return Vec::new(),
        };

        self.cards.iter().filter(|c| c.mistakes == max).collect()
    }

    /// Merge cards into the store
    ///
    /// A card whose term already exists replaces the stored card in place;
    /// others are appended. Definition uniqueness is not checked. Returns the
    /// number of cards given.
    pub fn merge<I>(&mut self, cards: I) -> usize
    where
        I: IntoIterator<Item = Card>,
    {
        let mut count = 0;
        for card in cards {
            match self.by_term.get(&card.term) {
                Some(&idx) => self.cards[idx] = card,
                None => self.push(card),
            }
            count += 1;
        }
        count
    }

    /// Import cards from a card file
    ///
    /// Returns the number of records read, or 0 if the file doesn't exist.
    /// The whole file is decoded before anything is merged, so a malformed
    /// record leaves the store untouched.
    pub fn import_from<P: AsRef<Path>>(&mut self, path: P) -> FlashcardResult<usize> {
        let path = path.as_ref();
        let Some(cards) = read_cards(path)? else {
            return Ok(0);
        };

        let count = self.merge(cards);
        info!(path = %path.display(), count, "imported cards");
        Ok(count)
    }

    /// Export every card to a card file, overwriting it
    pub fn export_to<P: AsRef<Path>>(&self, path: P) -> FlashcardResult<usize> {
        let path = path.as_ref();
        let count = write_cards(path, &self.cards)?;
        info!(path = %path.display(), count, "exported cards");
        Ok(count)
    }

    /// Get a card by term
    pub fn get(&self, term: &str) -> Option<&Card> {
        self.by_term.get(term).map(|&idx| &self.cards[idx])
    }

    /// Get a card by position in insertion order
    pub fn get_at(&self, idx: usize) -> Option<&Card> {
        self.cards.get(idx)
    }

    /// Mutable access to a card by position in insertion order
    pub fn get_at_mut(&mut self, idx: usize) -> Option<&mut Card> {
        self.cards.get_mut(idx)
    }

    /// Check whether a card with this term exists
    pub fn contains_term(&self, term: &str) -> bool {
        self.by_term.contains_key(term)
    }

    /// Term of the first card (in insertion order) with this definition
    pub fn term_for_definition(&self, definition: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|c| c.definition == definition)
            .map(|c| c.term.as_str())
    }

    /// Iterate over cards in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the store holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn push(&mut self, card: Card) {
        self.by_term.insert(card.term.clone(), self.cards.len());
        self.cards.push(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> CardStore {
        let mut store = CardStore::new();
        store.add("capital", "Paris").unwrap();
        store.add("author", "Twain").unwrap();
        store
    }

    fn terms(store: &CardStore) -> Vec<&str> {
        store.iter().map(|c| c.term.as_str()).collect()
    }

    #[test]
    fn test_add_and_get() {
        let store = create_test_store();

        assert_eq!(store.len(), 2);
        let card = store.get("capital").unwrap();
        assert_eq!(card.definition, "Paris");
        assert_eq!(card.mistakes, 0);
    }

    #[test]
    fn test_add_duplicate_term() {
        let mut store = create_test_store();

        let err = store.add("capital", "Rome").unwrap_err();
        assert!(matches!(err, FlashcardError::DuplicateTerm { term } if term == "capital"));

        // Term is checked first, even when the definition is also taken
        let err = store.add("capital", "Twain").unwrap_err();
        assert!(matches!(err, FlashcardError::DuplicateTerm { .. }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_duplicate_definition() {
        let mut store = create_test_store();

        let err = store.add("city", "Paris").unwrap_err();
        assert!(
            matches!(err, FlashcardError::DuplicateDefinition { definition } if definition == "Paris")
        );
        assert!(store.get("city").is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = create_test_store();
        store.add("planet", "Mars").unwrap();

        store.remove("capital").unwrap();

        assert_eq!(terms(&store), vec!["author", "planet"]);
        assert!(store.get("capital").is_none());
        // Index still points at the right cards after the shift
        assert_eq!(store.get("planet").unwrap().definition, "Mars");
        assert_eq!(store.get("author").unwrap().definition, "Twain");
    }

    #[test]
    fn test_remove_missing() {
        let mut store = create_test_store();

        let err = store.remove("planet").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(terms(&store), vec!["capital", "author"]);
    }

    #[test]
    fn test_hardest_cards_empty_store() {
        assert!(CardStore::new().hardest_cards().is_empty());
    }

    #[test]
    fn test_hardest_cards_without_mistakes() {
        assert!(create_test_store().hardest_cards().is_empty());
    }

    #[test]
    fn test_hardest_cards_ties_in_insertion_order() {
        let mut store = CardStore::new();
        store.merge(vec![
            Card::with_mistakes("a", "1", 3),
            Card::with_mistakes("b", "2", 1),
            Card::with_mistakes("c", "3", 3),
        ]);

        let hardest: Vec<_> = store.hardest_cards().iter().map(|c| c.term.as_str()).collect();
        assert_eq!(hardest, vec!["a", "c"]);
    }

    #[test]
    fn test_reset_stats() {
        let mut store = CardStore::new();
        store.merge(vec![
            Card::with_mistakes("a", "1", 3),
            Card::with_mistakes("b", "2", 1),
        ]);

        store.reset_stats();

        assert!(store.iter().all(|c| c.mistakes == 0));
        assert!(store.hardest_cards().is_empty());
    }

    #[test]
    fn test_merge_replaces_in_place() {
        let mut store = create_test_store();

        let count = store.merge(vec![
            Card::with_mistakes("capital", "Rome", 4),
            Card::new("planet", "Twain"),
        ]);

        assert_eq!(count, 2);
        assert_eq!(terms(&store), vec!["capital", "author", "planet"]);
        assert_eq!(store.get("capital").unwrap(), &Card::with_mistakes("capital", "Rome", 4));
        // Import does not enforce definition uniqueness
        assert_eq!(store.get("planet").unwrap().definition, "Twain");
    }

    #[test]
    fn test_import_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = create_test_store();

        let count = store.import_from(temp_dir.path().join("missing.txt")).unwrap();

        assert_eq!(count, 0);
        assert_eq!(terms(&store), vec!["capital", "author"]);
    }

    #[test]
    fn test_import_malformed_leaves_store_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cards.txt");
        fs::write(&path, "planet:Mars:0\nbroken line\n").unwrap();
        let mut store = create_test_store();

        let err = store.import_from(&path).unwrap_err();

        assert!(matches!(err, FlashcardError::MalformedRecord { line: 2, .. }));
        assert_eq!(terms(&store), vec!["capital", "author"]);
    }

    #[test]
    fn test_export_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cards.txt");
        let mut store = CardStore::new();
        store.merge(vec![
            Card::new("capital", "Paris"),
            Card::with_mistakes("author", "Twain", 2),
        ]);

        assert_eq!(store.export_to(&path).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "capital:Paris:0\nauthor:Twain:2"
        );
    }

    #[test]
    fn test_export_import_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cards.txt");
        let mut store = CardStore::new();
        store.merge(vec![
            Card::new("capital", "Paris"),
            Card::with_mistakes("author", "Twain", 2),
            Card::with_mistakes("planet", "Mars", 7),
        ]);

        store.export_to(&path).unwrap();
        let mut restored = CardStore::new();
        let count = restored.import_from(&path).unwrap();

        assert_eq!(count, 3);
        assert_eq!(restored.len(), store.len());
        for card in store.iter() {
            assert_eq!(restored.get(&card.term), Some(card));
        }
    }

    #[test]
    fn test_import_counts_records_not_new_cards() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cards.txt");
        let mut store = create_test_store();
        store.export_to(&path).unwrap();

        assert_eq!(store.import_from(&path).unwrap(), 2);
        assert_eq!(store.len(), 2);
    }
}
