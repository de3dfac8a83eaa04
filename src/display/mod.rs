//! Display formatting for terminal output
//!
//! Builds the user-facing dialogue lines for store and quiz operations.

pub mod card;
pub mod quiz;

pub use card::{
    format_added, format_exported, format_hardest, format_imported, format_removed,
    format_reset,
};
pub use quiz::{format_outcome, format_question};
