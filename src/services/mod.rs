//! Business logic layer
//!
//! Services operate on the card store; currently the quiz engine.

pub mod quiz;

pub use quiz::{
    AnswerSource, IndexPicker, QuizEngine, QuizOutcome, RandomPicker, RoundResult,
    SequencePicker,
};
