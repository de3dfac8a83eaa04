//! Quiz engine
//!
//! Runs question rounds against a card store: each round picks a card at
//! random, asks for its definition, scores the answer and bumps the card's
//! mistake counter when the answer is wrong.

use rand::Rng;
use tracing::debug;

use crate::error::FlashcardResult;
use crate::storage::CardStore;

/// Chooses which card a round asks about
pub trait IndexPicker {
    /// Return an index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniformly random picker backed by the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic picker that replays a fixed sequence of indices
///
/// Cycles when exhausted; indices are reduced modulo the store size.
#[derive(Debug, Clone)]
pub struct SequencePicker {
    indices: Vec<usize>,
    next: usize,
}

impl SequencePicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            next: 0,
        }
    }
}

impl IndexPicker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let idx = self.indices[self.next % self.indices.len()];
        self.next += 1;
        idx % len
    }
}

/// Supplies answers for quiz rounds
pub trait AnswerSource {
    /// Obtain the candidate definition for `term`
    fn answer(&mut self, term: &str) -> FlashcardResult<String>;

    /// Called once a round has been scored
    fn report(&mut self, _round: &RoundResult) -> FlashcardResult<()> {
        Ok(())
    }
}

impl<F> AnswerSource for F
where
    F: FnMut(&str) -> FlashcardResult<String>,
{
    fn answer(&mut self, term: &str) -> FlashcardResult<String> {
        self(term)
    }
}

/// How an answer was scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// The answer matched the card's definition
    Correct,
    /// The answer is the definition of a different card
    WrongButMatchesOtherTerm {
        correct_definition: String,
        other_term: String,
    },
    /// The answer matches no card
    WrongNoMatch { correct_definition: String },
}

impl QuizOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Result of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Term that was asked
    pub term: String,
    /// Answer that was given
    pub answer: String,
    pub outcome: QuizOutcome,
}

/// Drives quiz rounds over a card store
pub struct QuizEngine;

impl QuizEngine {
    /// Run `rounds` rounds, re-sampling from the current store each time
    ///
    /// The caller validates the round count and should not ask on an empty
    /// store; if it does, no rounds are played.
    pub fn ask<P, A>(
        store: &mut CardStore,
        rounds: usize,
        picker: &mut P,
        answers: &mut A,
    ) -> FlashcardResult<Vec<RoundResult>>
    where
        P: IndexPicker + ?Sized,
        A: AnswerSource + ?Sized,
    {
        let mut results = Vec::new();
        for _ in 0..rounds {
            let Some(result) = Self::play_round(store, picker, answers)? else {
                break;
            };
            answers.report(&result)?;
            results.push(result);
        }
        Ok(results)
    }

    /// Play one round; returns `None` when the store is empty
    pub fn play_round<P, A>(
        store: &mut CardStore,
        picker: &mut P,
        answers: &mut A,
    ) -> FlashcardResult<Option<RoundResult>>
    where
        P: IndexPicker + ?Sized,
        A: AnswerSource + ?Sized,
    {
        if store.is_empty() {
            return Ok(None);
        }

        let idx = picker.pick(store.len());
        let (term, definition) = match store.get_at(idx) {
            Some(card) => (card.term.clone(), card.definition.clone()),
            None => return Ok(None),
        };

        let answer = answers.answer(&term)?;
        let outcome = Self::score(store, &definition, &answer);

        if !outcome.is_correct() {
            if let Some(card) = store.get_at_mut(idx) {
                card.record_mistake();
            }
        }

        debug!(term = %term, correct = outcome.is_correct(), "quiz round scored");
        Ok(Some(RoundResult {
            term,
            answer,
            outcome,
        }))
    }

    fn score(store: &CardStore, definition: &str, answer: &str) -> QuizOutcome {
        if answer == definition {
            return QuizOutcome::Correct;
        }

        match store.term_for_definition(answer) {
            Some(other_term) => QuizOutcome::WrongButMatchesOtherTerm {
                correct_definition: definition.to_string(),
                other_term: other_term.to_string(),
            },
            None => QuizOutcome::WrongNoMatch {
                correct_definition: definition.to_string(),
            },
        }
    }
}
