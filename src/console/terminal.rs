//! Prompt/print surface shared by every exercise
//!
//! A `Terminal` pairs a [`LineSource`] with an output sink. Typed prompts
//! re-ask until the answer parses, so a stray letter never ends a run.

use colored::{Color, Colorize};
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::trace;

use crate::cli::Config;
use crate::console::display::ProgressDisplay;
use crate::console::input::{InputHandler, LineSource, ScriptedInput};
use crate::errors::{BootcampError, Result};

/// Rendering settings derived from config and verbosity
#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub width: usize,
    pub currency: String,
    pub color: bool,
    pub progress_step: Duration,
    pub show_progress: bool,
    /// Real terminal: screen clearing allowed
    pub interactive: bool,
}

impl DisplaySettings {
    pub fn from_config(config: &Config, show_progress: bool) -> Self {
        let interactive = io::stdout().is_terminal();
        Self {
            width: config.display.width,
            currency: config.display.currency.clone(),
            color: config.display.color && interactive,
            progress_step: Duration::from_millis(config.display.progress_step_ms),
            show_progress: show_progress && interactive,
            interactive,
        }
    }

    /// Plain settings for scripted runs
    pub fn plain() -> Self {
        Self {
            width: 80,
            currency: "£".to_string(),
            color: false,
            progress_step: Duration::from_millis(0),
            show_progress: false,
            interactive: false,
        }
    }
}

/// In-memory output sink that can be inspected after a run
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output buffer poisoned"))?;
        inner.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Prompt and print surface
pub struct Terminal {
    input: Box<dyn LineSource>,
    out: Box<dyn Write>,
    settings: DisplaySettings,
}

impl Terminal {
    pub fn new(input: Box<dyn LineSource>, out: Box<dyn Write>, settings: DisplaySettings) -> Self {
        Self { input, out, settings }
    }

    /// Terminal on stdin/stdout with line editing
    ///
    /// Answers are kept in `history` across runs when a path is given.
    pub fn stdio(settings: DisplaySettings, history: Option<PathBuf>) -> Result<Self> {
        let input = match history {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };
        Ok(Self::new(Box::new(input), Box::new(io::stdout()), settings))
    }

    /// Terminal answering from a script and writing to a buffer
    pub fn scripted<I, S>(answers: I) -> (Self, SharedBuffer)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::scripted_with(answers, DisplaySettings::plain())
    }

    pub fn scripted_with<I, S>(answers: I, settings: DisplaySettings) -> (Self, SharedBuffer)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let buffer = SharedBuffer::new();
        let terminal = Self::new(
            Box::new(ScriptedInput::new(answers)),
            Box::new(buffer.clone()),
            settings,
        );
        (terminal, buffer)
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn width(&self) -> usize {
        self.settings.width
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency
    }

    /// Print one line
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", line.as_ref())?;
        Ok(())
    }

    /// Print an empty spacing line
    pub fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    /// Colour `text` when colour output is on
    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.settings.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Bold text when colour output is on
    pub fn bold(&self, text: &str) -> String {
        if self.settings.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Print a warning line
    pub fn warn(&mut self, message: &str) -> Result<()> {
        let line = self.paint(message, Color::Yellow);
        self.say(line)
    }

    /// Clear the screen on real terminals; no-op otherwise
    pub fn clear(&mut self) -> Result<()> {
        if self.settings.interactive {
            execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Progress display honouring the settings
    pub fn progress(&self) -> ProgressDisplay {
        ProgressDisplay::new(self.settings.progress_step, self.settings.show_progress)
    }

    /// Free text answer; EOF is an error
    pub fn ask_text(&mut self, prompt: &str) -> Result<String> {
        self.out.flush()?;
        match self.input.read_line(&format!("{} ", prompt.trim_end()))? {
            Some(line) => {
                trace!(prompt, answer = %line, "prompt answered");
                Ok(line)
            }
            None => Err(BootcampError::InputClosed {
                prompt: prompt.to_string(),
            }),
        }
    }

    /// Free text answer that must contain something
    pub fn ask_nonempty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask_text(prompt)?;
            if !answer.trim().is_empty() {
                return Ok(answer);
            }
            self.warn("Please type something.")?;
        }
    }

    /// Re-ask until the answer parses as `T`
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str, retry: &str) -> Result<T> {
        loop {
            let answer = self.ask_text(prompt)?;
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.warn(retry)?,
            }
        }
    }

    pub fn ask_int(&mut self, prompt: &str) -> Result<i64> {
        self.ask_parsed(prompt, "Please enter a whole number.")
    }

    /// Re-ask until the answer is a finite number
    pub fn ask_float(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let value: f64 = self.ask_parsed(prompt, "Please enter a number.")?;
            if value.is_finite() {
                return Ok(value);
            }
            self.warn("Please enter a number.")?;
        }
    }

    /// Re-ask until the answer is one of `choices` (case-insensitive)
    ///
    /// An empty answer picks `default` when one is given. Returns the
    /// matching choice as written in `choices`.
    pub fn ask_choice(&mut self, prompt: &str, choices: &[&str], default: Option<&str>) -> Result<String> {
        let listing = choices.join("/");
        let full_prompt = match default {
            Some(d) => format!("{} [{}] ({}):", prompt.trim_end(), listing, d),
            None => format!("{} [{}]:", prompt.trim_end(), listing),
        };

        loop {
            let answer = self.ask_text(&full_prompt)?;
            let answer = answer.trim().to_lowercase();
            if answer.is_empty() {
                if let Some(d) = default {
                    return Ok(d.to_string());
                }
            }
            if let Some(choice) = choices.iter().find(|c| c.to_lowercase() == answer) {
                return Ok(choice.to_string());
            }
            self.warn(&format!("Please select one of the available options: {}", listing))?;
        }
    }

    /// Yes/no question
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask_choice(prompt, &["y", "n", "yes", "no"], None)?;
        Ok(answer.starts_with('y'))
    }
}
