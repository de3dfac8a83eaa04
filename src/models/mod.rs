//! Core data models for the flashcard manager
//!
//! A card set is a flat collection of [`Card`]s; all other state lives in the
//! store and the quiz engine.

pub mod card;

pub use card::Card;
