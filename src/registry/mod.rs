//! Command registry data structures.
//!
//! The registry is a const slice of `CommandMeta`: names, descriptions, the
//! access tier and what kind of command it is. Execution lives elsewhere, in a
//! [`CommandHandler`](crate::shell::handler::CommandHandler) that dispatches on
//! the command name.

use crate::auth::Session;

// Sub-modules
pub mod completion;

/// Access tier of a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Access {
    /// Always invokable
    Public = 0,

    /// Invokable only with an authenticated session
    Developer = 1,
}

/// What the interpreter does with a resolved command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// Payload produced by the command handler
    Content,

    /// Reset the display history
    Clear,

    /// Enter credential entry (or report the active session)
    Login,

    /// Queue a sign-out
    Logout,
}

/// Command metadata (const-initializable, no execution logic).
#[derive(Debug, Clone)]
pub struct CommandMeta {
    /// Command name, lowercase, without the leading `/`
    pub name: &'static str,

    /// One-line description (shown by `/help`)
    pub description: &'static str,

    /// Access tier
    pub access: Access,

    /// Dispatch kind
    pub kind: CommandKind,
}

impl CommandMeta {
    /// True for developer-tier commands.
    pub fn is_developer(&self) -> bool {
        self.access == Access::Developer
    }

    /// Whether the command is invokable (and listed) under `session`.
    ///
    /// `login` is always visible; developer commands only with a session.
    pub fn is_visible(&self, session: &Session) -> bool {
        self.access == Access::Public
            || self.kind == CommandKind::Login
            || session.is_authenticated()
    }
}

/// Registry of named commands, in enumeration order.
#[derive(Debug, Copy, Clone)]
pub struct CommandRegistry {
    /// All registered commands
    pub commands: &'static [CommandMeta],
}

impl CommandRegistry {
    /// Wrap a const command list.
    pub const fn new(commands: &'static [CommandMeta]) -> Self {
        Self { commands }
    }

    /// Find a command by name, ignoring ASCII case. No access filtering.
    pub fn find(&self, name: &str) -> Option<&'static CommandMeta> {
        self.commands
            .iter()
            .find(|cmd| cmd.name.eq_ignore_ascii_case(name))
    }

    /// Commands visible under `session`, in registry order.
    pub fn visible<'s>(
        &self,
        session: &'s Session,
    ) -> impl Iterator<Item = &'static CommandMeta> + 's {
        self.commands
            .iter()
            .filter(move |cmd| cmd.is_visible(session))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
