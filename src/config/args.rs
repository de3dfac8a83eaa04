//! Command-line arguments
//!
//! Both paths can also come from the environment:
//!
//! 1. `--import` / `--export` on the command line
//! 2. `FLASHCARDS_IMPORT` / `FLASHCARDS_EXPORT` environment variables
//!
//! The single-dash spellings `-import` and `-export` are accepted as well.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Command-line interface of the `flashcards` binary
#[derive(Parser, Debug)]
#[command(
    name = "flashcards",
    version,
    about = "Terminal flashcard manager",
    long_about = "Create term/definition flashcards, quiz yourself on them and \
                  track which cards you get wrong. Cards are stored as \
                  `term:definition:mistakes` lines."
)]
pub struct Args {
    /// Card file to load before the session starts
    #[arg(long = "import", value_name = "PATH", env = "FLASHCARDS_IMPORT")]
    pub import: Option<PathBuf>,

    /// Card file to save to when the session ends
    #[arg(long = "export", value_name = "PATH", env = "FLASHCARDS_EXPORT")]
    pub export: Option<PathBuf>,
}

const LEGACY_FLAGS: [(&str, &str); 2] = [("-import", "--import"), ("-export", "--export")];

/// Rewrite `-import`/`-export` to their double-dash forms
///
/// Clap reads `-import` as a cluster of short flags, so the rewrite has to
/// happen before parsing. Only exact matches are touched.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            LEGACY_FLAGS
                .iter()
                .find(|(legacy, _)| arg.as_os_str() == *legacy)
                .map(|(_, modern)| OsString::from(*modern))
                .unwrap_or(arg)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_legacy_args() {
        let args = normalize_legacy_args(["flashcards", "-import", "in.txt", "-export", "out.txt"]);
        assert_eq!(
            args,
            vec!["flashcards", "--import", "in.txt", "--export", "out.txt"]
        );
    }

    #[test]
    fn test_normalize_leaves_other_args() {
        let args = normalize_legacy_args(["flashcards", "--import", "-imports", "-export.txt"]);
        assert_eq!(args, vec!["flashcards", "--import", "-imports", "-export.txt"]);
    }

    #[test]
    fn test_parse_legacy_spelling() {
        let args = Args::try_parse_from(normalize_legacy_args([
            "flashcards",
            "-import",
            "cards.txt",
        ]))
        .unwrap();
        assert_eq!(args.import, Some(PathBuf::from("cards.txt")));
    }

    #[test]
    fn test_parse_both_paths() {
        let args =
            Args::try_parse_from(["flashcards", "--import", "a.txt", "--export", "b.txt"]).unwrap();
        assert_eq!(args.import, Some(PathBuf::from("a.txt")));
        assert_eq!(args.export, Some(PathBuf::from("b.txt")));
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Args::try_parse_from(["flashcards", "--bogus"]).is_err());
    }
}
