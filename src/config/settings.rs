//! Session settings
//!
//! The resolved configuration of one interactive session.

use std::path::PathBuf;

use super::args::Args;
use crate::error::FlashcardError;

/// Settings for one flashcard session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Card file imported at startup
    pub import_path: Option<PathBuf>,

    /// Card file exported on exit
    pub export_path: Option<PathBuf>,
}

impl Settings {
    /// Build settings from parsed command-line arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a path is empty (e.g. an empty environment
    /// variable).
    pub fn from_args(args: Args) -> Result<Self, FlashcardError> {
        Ok(Self {
            import_path: non_empty(args.import, "import")?,
            export_path: non_empty(args.export, "export")?,
        })
    }

    /// Settings with an import file
    pub fn with_import(mut self, path: impl Into<PathBuf>) -> Self {
        self.import_path = Some(path.into());
        self
    }

    /// Settings with an export file
    pub fn with_export(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = Some(path.into());
        self
    }
}

fn non_empty(path: Option<PathBuf>, what: &str) -> Result<Option<PathBuf>, FlashcardError> {
    match path {
        Some(p) if p.as_os_str().is_empty() => Err(FlashcardError::Config(format!(
            "{} path cannot be empty",
            what
        ))),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.import_path.is_none());
        assert!(settings.export_path.is_none());
    }

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from(["flashcards", "--export", "out.txt"]).unwrap();
        let settings = Settings::from_args(args).unwrap();

        assert_eq!(settings, Settings::default().with_export("out.txt"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let args = Args {
            import: Some(PathBuf::new()),
            export: None,
        };
        let err = Settings::from_args(args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: import path cannot be empty"
        );
    }
}
