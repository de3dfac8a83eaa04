//! Card store message formatting

use crate::models::Card;

/// Confirmation after a card is added
pub fn format_added(card: &Card) -> String {
    format!("The pair ({}) has been added.", card)
}

pub fn format_removed() -> String {
    "The card has been removed.".to_string()
}

/// Result of an import; zero records reads as a missing file
pub fn format_imported(count: usize) -> String {
    if count == 0 {
        "File not found.".to_string()
    } else {
        format!("{} cards have been loaded.", count)
    }
}

pub fn format_exported(count: usize) -> String {
    format!("{} cards have been saved.", count)
}

pub fn format_reset() -> String {
    "Card statistics have been reset.".to_string()
}

/// Describe the hardest card(s)
///
/// All cards are expected to share the same mistake count.
pub fn format_hardest(cards: &[&Card]) -> String {
    match cards {
        [] => "There are no cards with errors.".to_string(),
        [card] => format!(
            "The hardest card is \"{}\". You have {} errors answering it.",
            card.term, card.mistakes
        ),
        [first, ..] => {
            let terms = cards
                .iter()
                .map(|c| format!("\"{}\"", c.term))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "The hardest cards are {}. You have {} errors answering them",
                terms, first.mistakes
            )
        }
    }
}
