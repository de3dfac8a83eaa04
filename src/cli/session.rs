//! Interactive session
//!
//! Runs the read-eval-print loop over a card store. Every line printed to or
//! read from the user goes through [`Console`], which mirrors it into the
//! session transcript.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::Settings;
use crate::display::{
    format_added, format_exported, format_hardest, format_imported, format_outcome,
    format_question, format_removed, format_reset,
};
use crate::error::{FlashcardError, FlashcardResult};
use crate::services::{AnswerSource, IndexPicker, QuizEngine, RandomPicker, RoundResult};
use crate::storage::CardStore;
use crate::transcript::Transcript;

use super::commands::{action_prompt, CommandAction};

/// User-facing line I/O that records everything in a transcript
pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::new(),
        }
    }

    /// Print a line
    pub fn say(&mut self, line: impl Into<String>) -> FlashcardResult<()> {
        let line = line.into();
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        self.transcript.append(line);
        Ok(())
    }

    /// Read a line, without its terminator
    ///
    /// Invalid UTF-8 is replaced rather than rejected. Returns
    /// [`FlashcardError::InputClosed`] at end of input.
    pub fn read_line(&mut self) -> FlashcardResult<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(FlashcardError::InputClosed);
        }

        let mut line = String::from_utf8_lossy(&raw).into_owned();

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        self.transcript.append(line.clone());
        Ok(line)
    }

    /// Print a prompt and read the reply
    pub fn ask(&mut self, prompt: &str) -> FlashcardResult<String> {
        self.say(prompt)?;
        self.read_line()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Consume the console, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> AnswerSource for Console<R, W> {
    fn answer(&mut self, term: &str) -> FlashcardResult<String> {
        self.ask(&format_question(term))
    }

    fn report(&mut self, round: &RoundResult) -> FlashcardResult<()> {
        self.say(format_outcome(&round.outcome))
    }
}

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive flashcard session
pub struct Session<R, W, P = RandomPicker> {
    console: Console<R, W>,
    store: CardStore,
    picker: P,
    settings: Settings,
}

impl<R: BufRead, W: Write> Session<R, W, RandomPicker> {
    /// Create a session that picks quiz cards at random
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self::with_picker(input, output, settings, RandomPicker)
    }
}

impl<R: BufRead, W: Write, P: IndexPicker> Session<R, W, P> {
    /// Create a session with a custom card picker
    pub fn with_picker(input: R, output: W, settings: Settings, picker: P) -> Self {
        Self {
            console: Console::new(input, output),
            store: CardStore::new(),
            picker,
            settings,
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CardStore {
        &mut self.store
    }

    pub fn transcript(&self) -> &Transcript {
        self.console.transcript()
    }

    /// Consume the session, returning its output sink
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the session until `exit` or end of input
    pub fn run(&mut self) -> FlashcardResult<()> {
        if let Some(path) = self.settings.import_path.clone() {
            self.import(path)?;
            self.console.say("")?;
        }

        loop {
            match self.step() {
                Ok(Flow::Continue) => self.console.say("")?,
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.is_input_closed() => {
                    debug!("input closed, ending session");
                    return self.exit();
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> FlashcardResult<Flow> {
        let line = self.console.ask(&action_prompt())?;
        let Some(action) = CommandAction::parse(&line) else {
            return Ok(Flow::Continue);
        };

        match action {
            CommandAction::Add => self.add()?,
            CommandAction::Remove => self.remove()?,
            CommandAction::Import => {
                let path = self.console.ask("File name:")?;
                self.import(path.into())?;
            }
            CommandAction::Export => self.export()?,
            CommandAction::Ask => self.quiz()?,
            CommandAction::Exit => {
                self.exit()?;
                return Ok(Flow::Exit);
            }
            CommandAction::Log => self.log()?,
            CommandAction::HardestCard => {
                let message = format_hardest(&self.store.hardest_cards());
                self.console.say(message)?;
            }
            CommandAction::ResetStats => {
                self.store.reset_stats();
                self.console.say(format_reset())?;
            }
        }

        Ok(Flow::Continue)
    }

    fn add(&mut self) -> FlashcardResult<()> {
        let term = self.console.ask("The Card:")?;
        if self.store.contains_term(&term) {
            let err = FlashcardError::DuplicateTerm { term };
            return self.console.say(err.to_string());
        }

        let definition = self.console.ask("The definition of the card:")?;
        match self.store.add(term.as_str(), definition.as_str()) {
            Ok(()) => {
                let message = self
                    .store
                    .get(&term)
                    .map(format_added)
                    .unwrap_or_default();
                self.console.say(message)
            }
            Err(e) if e.is_duplicate() => self.console.say(e.to_string()),
            Err(e) => Err(e),
        }
    }

    fn remove(&mut self) -> FlashcardResult<()> {
        let term = self.console.ask("Which card?")?;
        match self.store.remove(&term) {
            Ok(()) => self.console.say(format_removed()),
            Err(e) if e.is_not_found() => self.console.say(e.to_string()),
            Err(e) => Err(e),
        }
    }

    fn import(&mut self, path: PathBuf) -> FlashcardResult<()> {
        match self.store.import_from(&path) {
            Ok(count) => self.console.say(format_imported(count)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "import failed");
                self.console.say(format!("Import failed: {}", e))
            }
        }
    }

    fn export(&mut self) -> FlashcardResult<()> {
        let path = self.console.ask("File name:")?;
        match self.store.export_to(&path) {
            Ok(count) => self.console.say(format_exported(count)),
            Err(e) => {
                warn!(path = %path, error = %e, "export failed");
                self.console.say(format!("Export failed: {}", e))
            }
        }
    }

    fn quiz(&mut self) -> FlashcardResult<()> {
        let reply = self.console.ask("How many times to ask?")?;
        let rounds = match reply.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                let err = FlashcardError::InvalidRoundCount(reply);
                return self.console.say(err.to_string());
            }
        };

        if self.store.is_empty() {
            return self.console.say("There are no cards to ask about.");
        }

        QuizEngine::ask(&mut self.store, rounds, &mut self.picker, &mut self.console)?;
        Ok(())
    }

    fn log(&mut self) -> FlashcardResult<()> {
        let path = self.console.ask("File name:")?;
        match self.console.transcript().flush(&path) {
            Ok(_) => self.console.say("The log has been saved."),
            Err(e) => {
                warn!(path = %path, error = %e, "saving transcript failed");
                self.console.say(format!("Log failed: {}", e))
            }
        }
    }

    fn exit(&mut self) -> FlashcardResult<()> {
        self.console.say("Bye bye!")?;
        if let Some(path) = self.settings.export_path.clone() {
            let count = self.store.export_to(&path)?;
            self.console.say(format_exported(count))?;
        }
        Ok(())
    }
}
