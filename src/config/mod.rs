//! Configuration module for the flashcard manager
//!
//! This module provides configuration management including:
//! - Command-line argument parsing with environment overrides
//! - The resolved session settings handed to the driver

pub mod args;
pub mod settings;

pub use args::{normalize_legacy_args, Args};
pub use settings::Settings;
