//! Command handler trait for executing content commands.
//!
//! The registry holds metadata; a `CommandHandler` holds the behavior. The
//! terminal resolves the name, applies the access gate, then dispatches here.

use crate::auth::Session;
use crate::error::CliError;
use crate::registry::CommandMeta;
use crate::response::CommandResult;
use crate::shell::history::CommandHistoryLog;

/// Read-only state a handler may inspect.
#[derive(Debug)]
pub struct CommandContext<'a> {
    /// Current session snapshot
    pub session: &'a Session,

    /// Every submitted line so far (the current one not yet included)
    pub log: &'a CommandHistoryLog,

    /// Commands visible under `session`, in registry order
    pub visible: Vec<&'static CommandMeta>,

    /// Number of entries currently on screen
    pub display_len: usize,

    /// Size of the whole registry
    pub registry_len: usize,
}

/// Command execution handler trait.
///
/// Dispatches on the registry name (lowercase, no slash).
pub trait CommandHandler {
    /// Execute a command.
    ///
    /// # Returns
    ///
    /// - `Ok(CommandResult)`: payload, error text or clear signal
    /// - `Err(CliError::CommandNotFound)`: name not handled here
    /// - `Err(CliError)`: other failure, shown as an `Error` entry
    fn execute(&self, name: &str, ctx: &CommandContext<'_>) -> Result<CommandResult, CliError>;
}
