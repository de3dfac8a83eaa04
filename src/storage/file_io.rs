//! Card file codec with atomic writes
//!
//! The card file holds one record per line, `term:definition:mistakes`, with
//! no escaping. A term or definition containing `:` cannot be stored
//! losslessly; such records fail to decode on the way back in.

use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{FlashcardError, FlashcardResult};
use crate::models::card::{Card, FIELD_SEPARATOR};

/// Encode a card as a single record line (without the line terminator)
pub fn encode_card(card: &Card) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        card.term,
        card.definition,
        card.mistakes,
        sep = FIELD_SEPARATOR
    )
}

/// Decode one record line; `line_no` is 1-based and only used for errors
pub fn decode_line(line: &str, line_no: usize) -> FlashcardResult<Card> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [term, definition, mistakes] = fields.as_slice() else {
        return Err(FlashcardError::malformed(
            line_no,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    };

    let mistakes = parse_mistakes(mistakes).ok_or_else(|| {
        FlashcardError::malformed(
            line_no,
            format!("mistake count '{}' is not a non-negative integer", mistakes),
        )
    })?;

    Ok(Card::with_mistakes(*term, *definition, mistakes))
}

/// Digits only: `u32::from_str` would also accept a leading `+`
fn parse_mistakes(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Decode a whole card file body
pub fn decode_cards(contents: &str) -> FlashcardResult<Vec<Card>> {
    contents
        .lines()
        .enumerate()
        .map(|(idx, line)| decode_line(line, idx + 1))
        .collect()
}

/// Encode cards as newline-joined records, without a trailing newline
pub fn encode_cards<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .map(|card| {
            if card.has_separator_conflict() {
                warn!(term = %card.term, "card contains the field separator; it will not re-import cleanly");
            }
            encode_card(card)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read cards from a file, returning `None` if the file doesn't exist
pub fn read_cards<P: AsRef<Path>>(path: P) -> FlashcardResult<Option<Vec<Card>>> {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "card file absent");
            return Ok(None);
        }
        Err(e) => {
            return Err(FlashcardError::Io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    let cards = decode_cards(&contents)?;
    debug!(path = %path.display(), count = cards.len(), "decoded card file");
    Ok(Some(cards))
}

/// Write cards to a file, returning the number of records written
pub fn write_cards<'a, P, I>(path: P, cards: I) -> FlashcardResult<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Card>,
{
    let cards: Vec<&Card> = cards.into_iter().collect();
    write_text_atomic(path, &encode_cards(cards.iter().copied()))?;
    Ok(cards.len())
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The target is either completely written or not modified at all. The
/// temp file gets a fresh unique name, so no existing file is clobbered.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> FlashcardResult<()> {
    let path = path.as_ref();

    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| {
                FlashcardError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
            parent
        }
        None => Path::new("."),
    };

    // Same directory as the target so the rename stays on one filesystem
    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| FlashcardError::Io(format!("Failed to create temp file: {}", e)))?;

    {
        let mut writer = BufWriter::new(&mut temp);
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| FlashcardError::Io(format!("Failed to write data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| FlashcardError::Io(format!("Failed to flush data: {}", e)))?;
    }

    temp.as_file()
        .sync_all()
        .map_err(|e| FlashcardError::Io(format!("Failed to sync data: {}", e)))?;

    // A failed persist drops the temp file, which removes it
    temp.persist(path)
        .map_err(|e| FlashcardError::Io(format!("Failed to rename temp file: {}", e.error)))?;

    Ok(())
}
