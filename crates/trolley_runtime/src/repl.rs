//! The prompt-and-read loop.

use std::io::{self, Write};

use tracing::{debug, info};
use trolley_engine::{Ending, Outcome, Turn};
use trolley_foundation::{Error, Result};

use crate::config::GameConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive shopping trip.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The trip being played.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Where game text is written. Stdout unless replaced.
    output: Box<dyn Write>,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL for `config` with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built or the editor fails
    /// to initialize.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Self::with_editor(editor, config)
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL for `config` reading from the given editor.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the session cannot be built.
    pub fn with_editor(editor: E, config: &GameConfig) -> Result<Self> {
        let session = Session::from_config(config)?;
        Ok(Self::with_session(editor, session)
            .with_prompt(config.prompt.clone())
            .with_banner(config.show_banner))
    }

    /// Creates a REPL around an existing session.
    #[must_use]
    pub fn with_session(mut editor: E, session: Session) -> Self {
        editor.set_words(session.completion_words());
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "> ".to_string(),
            output: Box::new(io::stdout()),
        }
    }

    /// Shows or hides the welcome banner.
    #[must_use]
    pub const fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sends game text to `output` instead of stdout.
    #[must_use]
    pub fn with_output(mut self, output: impl Write + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the loop until the trip ends or input runs out.
    ///
    /// Returns the ending, or `None` if input ended first.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails or game state breaks.
    pub fn run(&mut self) -> Result<Option<Ending>> {
        if self.show_banner {
            self.say(&banner())?;
        }
        let opening = self.session.opening()?;
        self.say(&opening)?;
        info!(seed = self.session.seed(), "session started");

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    self.say("")?;
                    continue;
                }
                ReadResult::Eof => {
                    debug!("input closed");
                    self.say("")?;
                    return Ok(None);
                }
            };

            let Some(turn) = self.step(&line)? else {
                continue;
            };

            let text = turn.text();
            if !text.is_empty() {
                self.say(&text)?;
            }
            if let Outcome::Terminate(ending) = turn.outcome {
                info!(%ending, "trip over");
                return Ok(Some(ending));
            }
        }
    }

    /// Runs one line of input. Blank lines are skipped and return `None`.
    ///
    /// # Errors
    ///
    /// Returns an error only for broken game state.
    pub fn step(&mut self, line: &str) -> Result<Option<Turn>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        self.editor.add_history(line);
        self.session.handle(line).map(Some)
    }

    /// Writes one line of game text and flushes it.
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")
            .and_then(|()| self.output.flush())
            .map_err(|e| Error::io(e.to_string()))
    }
}

fn banner() -> String {
    format!(
        "\x1b[1mTrolley\x1b[0m v{} - a very small grocery run\n\
         Type \x1b[1mhelp\x1b[0m for the things you can do.\n",
        env!("CARGO_PKG_VERSION")
    )
}
