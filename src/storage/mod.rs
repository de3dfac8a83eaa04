//! Storage layer for the flashcard manager
//!
//! Provides the in-memory card store and the colon-delimited card file
//! codec with atomic writes.

pub mod cards;
pub mod file_io;

pub use cards::CardStore;
pub use file_io::{read_cards, write_cards, write_text_atomic};
