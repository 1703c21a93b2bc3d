//! Command results and display history entries.
//!
//! `CommandResult` is what a handler hands back; `HistoryEntry` is what the
//! terminal keeps on screen. Handlers never touch the display history directly.

use crate::error::CliError;

/// Result of executing a command.
///
/// `Clear` tells the terminal to discard the display history. `Output` and
/// `Error` are appended after the command line that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Payload to display
    Output(String),

    /// User-visible failure message
    Error(String),

    /// Discard the display history
    Clear,
}

impl CommandResult {
    /// Create an output result.
    pub fn output(content: impl Into<String>) -> Self {
        Self::Output(content.into())
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

impl From<CliError> for CommandResult {
    fn from(err: CliError) -> Self {
        Self::error(err.to_string())
    }
}

/// One line of the terminal's display history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    /// The raw text the user submitted
    Command(String),

    /// Command output
    Output(String),

    /// Error message
    Error(String),
}

impl HistoryEntry {
    /// Text carried by the entry, whatever its kind.
    pub fn text(&self) -> &str {
        match self {
            Self::Command(s) | Self::Output(s) | Self::Error(s) => s,
        }
    }
}
