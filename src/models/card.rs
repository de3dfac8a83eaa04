//! Card model
//!
//! A term/definition pair with a counter of wrong answers given for it.

use std::fmt;

/// Field separator used by the persisted card file
pub const FIELD_SEPARATOR: char = ':';

/// A single flashcard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The prompt shown to the user; unique within a store
    pub term: String,

    /// The expected answer
    pub definition: String,

    /// Number of wrong answers given for this card
    pub mistakes: u32,
}

impl Card {
    /// Create a new card with no recorded mistakes
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::with_mistakes(term, definition, 0)
    }

    /// Create a card with an existing mistake count (used when restoring)
    pub fn with_mistakes(
        term: impl Into<String>,
        definition: impl Into<String>,
        mistakes: u32,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }

    /// Record one wrong answer
    pub fn record_mistake(&mut self) {
        self.mistakes = self.mistakes.saturating_add(1);
    }

    /// Forget all recorded mistakes
    pub fn reset_mistakes(&mut self) {
        self.mistakes = 0;
    }

    /// Whether the term or definition cannot be stored losslessly in the
    /// colon-delimited card file
    pub fn has_separator_conflict(&self) -> bool {
        [&self.term, &self.definition]
            .iter()
            .any(|field| field.contains(FIELD_SEPARATOR) || field.contains(['\n', '\r']))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\":\"{}\"", self.term, self.definition)
    }
}
