//! Flashcards - terminal flashcard manager
//!
//! This library provides the core functionality for an interactive flashcard
//! manager: users create term/definition cards, quiz themselves, track how
//! often they get each card wrong, and save the set to a plain text file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Command-line arguments and session settings
//! - `error`: Custom error types
//! - `models`: The card model
//! - `storage`: Card store and the `term:definition:mistakes` file codec
//! - `services`: Quiz engine
//! - `display`: User-facing message formatting
//! - `transcript`: Session transcript for the `log` command
//! - `cli`: Interactive read-eval-print loop
//!
//! # Example
//!
//! ```rust,ignore
//! use flashcards::services::{QuizEngine, RandomPicker};
//! use flashcards::storage::CardStore;
//!
//! let mut store = CardStore::new();
//! store.add("capital", "Paris")?;
//! let results = QuizEngine::ask(&mut store, 1, &mut RandomPicker, &mut |_term: &str| {
//!     Ok("Paris".to_string())
//! })?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod transcript;

pub use error::{FlashcardError, FlashcardResult};
