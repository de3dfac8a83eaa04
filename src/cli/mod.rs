//! Interactive command-line driver
//!
//! This module contains the read-eval-print loop, bridging typed commands
//! with the card store and the quiz engine.

pub mod commands;
pub mod session;

pub use commands::{action_prompt, CommandAction, COMMANDS};
pub use session::{Console, Session};
