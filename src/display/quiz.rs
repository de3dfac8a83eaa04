//! Quiz dialogue formatting

use crate::services::QuizOutcome;

/// Prompt asking for a term's definition
pub fn format_question(term: &str) -> String {
    format!("Print the definition of \"{}\":", term)
}

/// Feedback line for a scored answer
pub fn format_outcome(outcome: &QuizOutcome) -> String {
    match outcome {
        QuizOutcome::Correct => "Correct!".to_string(),
        QuizOutcome::WrongButMatchesOtherTerm {
            correct_definition,
            other_term,
        } => format!(
            "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
            correct_definition, other_term
        ),
        QuizOutcome::WrongNoMatch { correct_definition } => {
            format!("Wrong. The right answer is \"{}\".", correct_definition)
        }
    }
}
