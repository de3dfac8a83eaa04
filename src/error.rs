//! Custom error types for the flashcard manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for flashcard operations
#[derive(Error, Debug)]
pub enum FlashcardError {
    /// A card with this term is already in the store
    #[error("The card \"{term}\" already exists.")]
    DuplicateTerm { term: String },

    /// A card with this definition is already in the store
    #[error("The definition \"{definition}\" already exists.")]
    DuplicateDefinition { definition: String },

    /// No card has the requested term
    #[error("Can't remove \"{term}\": there is no such card.")]
    NotFound { term: String },

    /// A persisted card line could not be decoded
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// The requested number of quiz rounds is not a positive integer
    #[error("{0} is not a valid number of rounds.")]
    InvalidRoundCount(String),

    /// The user's input stream ended
    #[error("Input closed")]
    InputClosed,

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FlashcardError {
    /// Create a "not found" error for a term
    pub fn card_not_found(term: impl Into<String>) -> Self {
        Self::NotFound { term: term.into() }
    }

    /// Create a malformed record error for a 1-based line number
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the input stream ended
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }

    /// Check if this error rejects a duplicate term or definition
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateTerm { .. } | Self::DuplicateDefinition { .. }
        )
    }
}

impl From<std::io::Error> for FlashcardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for flashcard operations
pub type FlashcardResult<T> = Result<T, FlashcardError>;
