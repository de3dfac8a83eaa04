//! Session transcript
//!
//! An append-only record of every line printed to or read from the user,
//! in the order it happened. The `log` command writes it out verbatim.

use std::path::Path;

use tracing::info;

use crate::error::FlashcardResult;
use crate::storage::write_text_atomic;

/// Ordered log of the session's dialogue
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line (without its terminator)
    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All recorded lines, oldest first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get the number of recorded lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the transcript with every line newline-terminated
    pub fn render(&self) -> String {
        self.lines.iter().fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
    }

    /// Write the transcript to a file, overwriting it
    ///
    /// Returns the number of lines written. The transcript itself is kept.
    pub fn flush<P: AsRef<Path>>(&self, path: P) -> FlashcardResult<usize> {
        let path = path.as_ref();
        write_text_atomic(path, &self.render())?;
        info!(path = %path.display(), lines = self.len(), "saved transcript");
        Ok(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_transcript() -> Transcript {
        let mut transcript = Transcript::new();
        transcript.append("Input the action:");
        transcript.append("add");
        transcript.append("");
        transcript
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.render(), "");
    }

    #[test]
    fn test_append_keeps_order() {
        let transcript = create_test_transcript();

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.lines(), &["Input the action:", "add", ""]);
        assert_eq!(transcript.render(), "Input the action:\nadd\n\n");
    }

    #[test]
    fn test_flush_writes_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.log");
        let transcript = create_test_transcript();

        assert_eq!(transcript.flush(&path).unwrap(), 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Input the action:\nadd\n\n");
    }

    #[test]
    fn test_flush_overwrites_and_keeps_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.log");
        let mut transcript = create_test_transcript();

        transcript.flush(&path).unwrap();
        transcript.append("log");
        transcript.flush(&path).unwrap();

        assert_eq!(transcript.len(), 4);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Input the action:\nadd\n\nlog\n"
        );
    }
}
