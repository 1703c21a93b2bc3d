//! Incremental ANSI renderer for a [`Terminal`].
//!
//! Writes entries appended since the last render, then redraws the input line
//! (prompt, buffer, dimmed ghost text). A display reset clears the screen.

use crate::config::ShellConfig;
use crate::io::CharIo;
use crate::response::HistoryEntry;
use crate::shell::handler::CommandHandler;
use crate::shell::{InputMode, Terminal, mask_credentials};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const ERASE_LINE: &str = "\r\x1b[K";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Tracks what has already been written to the device.
#[derive(Debug, Default)]
pub struct Screen {
    rendered: usize,
    generation: u64,
    prompt: Option<String>,
}

impl Screen {
    /// Renderer using the config's prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with a runtime prompt (command mode only).
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            ..Self::default()
        }
    }

    /// Number of display entries written so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Write the banner.
    pub fn welcome<C: ShellConfig, IO: CharIo>(&mut self, io: &mut IO) -> Result<(), IO::Error> {
        write_lines(io, C::MSG_WELCOME.trim_end(), "")?;
        io.write_str("\r\n")
    }

    /// Ring the terminal bell.
    pub fn bell<IO: CharIo>(&self, io: &mut IO) -> Result<(), IO::Error> {
        io.put_char('\x07')
    }

    /// Bring the device up to date with `term`.
    pub fn render<H, C, IO>(&mut self, term: &Terminal<H, C>, io: &mut IO) -> Result<(), IO::Error>
    where
        H: CommandHandler,
        C: ShellConfig,
        IO: CharIo,
    {
        if term.clear_generation() != self.generation {
            io.write_str(CLEAR_SCREEN)?;
            self.generation = term.clear_generation();
            self.rendered = 0;
        }

        let entries = term.display();
        if self.rendered > entries.len() {
            self.rendered = 0;
        }

        let fresh = &entries[self.rendered..];
        if !fresh.is_empty() {
            io.write_str(ERASE_LINE)?;
            for entry in fresh {
                self.write_entry(term, entry, io)?;
            }
            self.rendered = entries.len();
        }

        self.draw_input_line(term, io)
    }

    fn write_entry<H, C, IO>(
        &self,
        term: &Terminal<H, C>,
        entry: &HistoryEntry,
        io: &mut IO,
    ) -> Result<(), IO::Error>
    where
        H: CommandHandler,
        C: ShellConfig,
        IO: CharIo,
    {
        match entry {
            HistoryEntry::Command(line) => {
                io.write_str(self.prompt_for(term, InputMode::Command))?;
                io.write_str(line)?;
            }
            HistoryEntry::Output(text) => write_lines(io, text, "  ")?,
            HistoryEntry::Error(text) => {
                io.write_str(RED)?;
                write_lines(io, text, "  ")?;
                io.write_str(RESET)?;
            }
        }
        io.write_str("\r\n")
    }

    fn draw_input_line<H, C, IO>(&self, term: &Terminal<H, C>, io: &mut IO) -> Result<(), IO::Error>
    where
        H: CommandHandler,
        C: ShellConfig,
        IO: CharIo,
    {
        io.write_str(ERASE_LINE)?;
        io.write_str(self.prompt_for(term, term.mode()))?;

        match term.mode() {
            InputMode::Credentials => io.write_str(&mask_credentials(term.buffer())),
            InputMode::Command => {
                io.write_str(term.buffer())?;
                let ghost = term.ghost_text();
                if ghost.is_empty() {
                    return Ok(());
                }
                io.write_str(DIM)?;
                io.write_str(ghost)?;
                io.write_str(RESET)?;
                // Park the cursor at the end of the typed text
                io.write_str(&format!("\x1b[{}D", ghost.chars().count()))
            }
        }
    }

    fn prompt_for<'a, H, C>(&'a self, term: &Terminal<H, C>, mode: InputMode) -> &'a str
    where
        H: CommandHandler,
        C: ShellConfig,
    {
        match (mode, &self.prompt) {
            (InputMode::Command, Some(prompt)) => prompt,
            (InputMode::Command, None) => C::PROMPT,
            (InputMode::Credentials, _) => term.prompt(),
        }
    }
}

/// Write `text` with `\r\n` line endings, each line prefixed by `indent`.
fn write_lines<IO: CharIo>(io: &mut IO, text: &str, indent: &str) -> Result<(), IO::Error> {
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            io.write_str("\r\n")?;
        }
        io.write_str(indent)?;
        io.write_str(line)?;
    }
    Ok(())
}
