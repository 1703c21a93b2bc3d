//! Terminal interpreter state machine.
//!
//! `Terminal` owns the edit buffer, the submitted-line log, the display history
//! and a snapshot of the session. All transitions are synchronous:
//! [`Terminal::submit`] runs a line to completion and [`Terminal::on_key`]
//! applies one key event. Anything that needs the auth provider is queued as an
//! [`AuthRequest`] for the caller (usually a [`Console`](console::Console)).

use core::fmt;
use core::marker::PhantomData;

use crate::auth::Session;
use crate::config::{INPUT_CAPACITY, ShellConfig};
use crate::error::CliError;
use crate::registry::completion::{compute_suggestions, ghost_text};
use crate::registry::{CommandKind, CommandMeta, CommandRegistry};
use crate::response::{CommandResult, HistoryEntry};

// Sub-modules
pub mod console;
pub mod decoder;
pub mod handler;
pub mod history;
pub mod screen;

// Re-export key types
pub use console::Console;
pub use decoder::{InputDecoder, InputEvent};
pub use handler::{CommandContext, CommandHandler};
pub use history::{CommandHistoryLog, Recall};
pub use screen::Screen;

/// What the edit buffer is currently collecting.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Slash commands
    Command,

    /// An `email:password` line after `/login`
    Credentials,
}

/// Work for the auth provider, queued by the interpreter.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthRequest {
    /// Sign in with email and password
    SignIn {
        /// Email as typed (trimmed)
        email: String,
        /// Password as typed
        password: String,
    },

    /// End the current session
    SignOut,
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn { email, .. } => f
                .debug_struct("SignIn")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Self::SignOut => f.write_str("SignOut"),
        }
    }
}

/// Result of feeding one key event to the terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// State changed; redraw
    Changed,

    /// Key had no effect
    Ignored,

    /// Key rejected (edit buffer full); ring the bell
    Bell,

    /// Ctrl-C / Ctrl-D; the front end decides whether to quit
    Interrupt,
}

/// Replace everything after the first `:` with `*`.
///
/// Used for echoing credential lines on screen and in the display history.
pub fn mask_credentials(line: &str) -> String {
    match line.split_once(':') {
        Some((email, password)) => {
            let mut masked = String::with_capacity(line.len());
            masked.push_str(email);
            masked.push(':');
            masked.extend(password.chars().map(|_| '*'));
            masked
        }
        None => line.to_string(),
    }
}

/// Detach a recall step from the log borrow.
fn owned_recall(recalled: Recall<'_>) -> Option<String> {
    match recalled {
        Recall::Entry(entry) => Some(entry.to_string()),
        Recall::Fresh => Some(String::new()),
        Recall::Unchanged => None,
    }
}

/// Interpreter state.
///
/// Generic over:
/// - `H`: CommandHandler implementation (content payloads)
/// - `C`: ShellConfig implementation (prompt, messages, input limit)
pub struct Terminal<H, C>
where
    H: CommandHandler,
    C: ShellConfig,
{
    /// Registered commands
    registry: CommandRegistry,

    /// Content command handlers
    handlers: H,

    /// Session snapshot (written only through `set_session`)
    session: Session,

    /// Edit buffer
    buffer: heapless::String<INPUT_CAPACITY>,

    /// Every submitted non-empty line, plus the recall cursor
    log: CommandHistoryLog,

    /// What is on screen
    display: Vec<HistoryEntry>,

    /// Incremented every time the display history is reset
    clear_generation: u64,

    /// Suggestions for the current buffer and session
    suggestions: Vec<&'static str>,

    /// Command or credential entry
    mode: InputMode,

    /// Auth work waiting for the caller
    pending: Vec<AuthRequest>,

    /// Config type marker (zero-size)
    _config: PhantomData<C>,
}

impl<H, C> fmt::Debug for Terminal<H, C>
where
    H: CommandHandler,
    C: ShellConfig,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug_struct = f.debug_struct("Terminal");
        debug_struct
            .field("mode", &self.mode)
            .field("history_index", &self.log.position())
            .field("log_len", &self.log.len())
            .field("display_len", &self.display.len())
            .field("authenticated", &self.session.is_authenticated());

        // Never show a half-typed password
        if self.mode == InputMode::Credentials {
            debug_struct.field("buffer", &mask_credentials(&self.buffer));
        } else {
            debug_struct.field("buffer", &self.buffer.as_str());
        }

        debug_struct.finish_non_exhaustive()
    }
}

impl<H, C> Terminal<H, C>
where
    H: CommandHandler,
    C: ShellConfig,
{
    /// Create a terminal with an anonymous session and empty history.
    pub fn new(registry: CommandRegistry, handlers: H) -> Self {
        Self {
            registry,
            handlers,
            session: Session::anonymous(),
            buffer: heapless::String::new(),
            log: CommandHistoryLog::new(),
            display: Vec::new(),
            clear_generation: 0,
            suggestions: Vec::new(),
            mode: InputMode::Command,
            pending: Vec::new(),
            _config: PhantomData,
        }
    }

    // ========================================
    // Submission
    // ========================================

    /// Submit a line as a command.
    ///
    /// Blank lines are ignored entirely. Any other line is recorded in the
    /// command log, resolved, and its result appended to (or, for clear,
    /// wiped from) the display history. Clears the edit buffer and leaves
    /// recall mode.
    pub fn submit(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }

        log::debug!("submit {:?}", raw);
        let result = self.evaluate(raw);
        self.log.push(raw);

        match result {
            CommandResult::Clear => self.clear_display(),
            CommandResult::Output(content) => {
                self.display.push(HistoryEntry::Command(raw.to_string()));
                self.display.push(HistoryEntry::Output(content));
            }
            CommandResult::Error(message) => {
                self.display.push(HistoryEntry::Command(raw.to_string()));
                self.display.push(HistoryEntry::Error(message));
            }
        }

        self.buffer.clear();
        self.log.reset_position();
        self.refresh_suggestions();
    }

    /// Resolve a line to its result. Does not touch the log or display.
    fn evaluate(&mut self, raw: &str) -> CommandResult {
        let Some(rest) = raw.strip_prefix('/') else {
            return CliError::InvalidInput(raw.to_string()).into();
        };
        let lowered = rest.to_lowercase();
        let name = lowered.trim();

        if name == "clear" {
            return CommandResult::Clear;
        }

        let Some(meta) = self.registry.find(name) else {
            log::debug!("unknown command {:?}", name);
            return CliError::CommandNotFound(raw.to_string()).into();
        };

        if meta.is_developer()
            && meta.kind != CommandKind::Login
            && !self.session.is_authenticated()
        {
            log::debug!("denied developer command {:?}", meta.name);
            return CliError::NotAuthenticated.into();
        }

        match meta.kind {
            CommandKind::Clear => CommandResult::Clear,
            CommandKind::Login => self.begin_login(),
            CommandKind::Logout => self.begin_logout(),
            CommandKind::Content => self.execute_content(meta),
        }
    }

    fn execute_content(&self, meta: &'static CommandMeta) -> CommandResult {
        let ctx = CommandContext {
            session: &self.session,
            log: &self.log,
            visible: self.registry.visible(&self.session).collect(),
            display_len: self.display.len(),
            registry_len: self.registry.len(),
        };

        self.handlers
            .execute(meta.name, &ctx)
            .unwrap_or_else(CommandResult::from)
    }

    fn begin_login(&mut self) -> CommandResult {
        match self.session.identity() {
            Some(identity) => CommandResult::Output(format!(
                "Already signed in as {}. Use /logout to end the session.",
                identity.email
            )),
            None => {
                self.mode = InputMode::Credentials;
                CommandResult::output(C::MSG_CREDENTIALS_PROMPT)
            }
        }
    }

    fn begin_logout(&mut self) -> CommandResult {
        self.pending.push(AuthRequest::SignOut);
        CommandResult::output("Signing out...")
    }

    /// Handle Enter while collecting credentials.
    fn submit_credentials(&mut self) -> KeyOutcome {
        if self.buffer.trim().is_empty() {
            return KeyOutcome::Ignored;
        }

        let line = self.buffer.to_string();
        self.buffer.clear();
        self.mode = InputMode::Command;

        match line.split_once(':') {
            Some((email, password)) => {
                let email = email.trim().to_string();
                self.display.push(HistoryEntry::Command(mask_credentials(&line)));
                self.display
                    .push(HistoryEntry::Output(format!("Signing in as {}...", email)));
                self.pending.push(AuthRequest::SignIn {
                    email,
                    password: password.to_string(),
                });
            }
            None => {
                self.display.push(HistoryEntry::Command(line));
                self.display
                    .push(HistoryEntry::Error(CliError::InvalidLoginFormat.to_string()));
            }
        }

        self.refresh_suggestions();
        KeyOutcome::Changed
    }

    fn clear_display(&mut self) {
        self.display.clear();
        self.clear_generation += 1;
    }

    // ========================================
    // Key handling
    // ========================================

    /// Apply one key event.
    pub fn on_key(&mut self, event: InputEvent) -> KeyOutcome {
        match event {
            InputEvent::None => KeyOutcome::Ignored,

            InputEvent::Interrupt => KeyOutcome::Interrupt,

            InputEvent::Enter => match self.mode {
                InputMode::Credentials => self.submit_credentials(),
                InputMode::Command => {
                    if self.buffer.trim().is_empty() {
                        return KeyOutcome::Ignored;
                    }
                    let raw = self.buffer.to_string();
                    self.submit(&raw);
                    KeyOutcome::Changed
                }
            },

            InputEvent::Tab => self.handle_tab(),

            InputEvent::UpArrow => {
                if self.mode == InputMode::Credentials {
                    return KeyOutcome::Ignored;
                }
                let recalled = owned_recall(self.log.previous_command());
                self.apply_recall(recalled)
            }

            InputEvent::DownArrow => {
                if self.mode == InputMode::Credentials {
                    return KeyOutcome::Ignored;
                }
                let recalled = owned_recall(self.log.next_command());
                self.apply_recall(recalled)
            }

            InputEvent::Char(c) => self.insert_char(c),

            InputEvent::Backspace => {
                if self.buffer.pop().is_none() {
                    return KeyOutcome::Ignored;
                }
                self.after_edit();
                KeyOutcome::Changed
            }

            InputEvent::DoubleEsc => {
                if self.mode == InputMode::Credentials {
                    self.mode = InputMode::Command;
                    self.buffer.clear();
                    self.display
                        .push(HistoryEntry::Output(C::MSG_LOGIN_CANCELLED.to_string()));
                    self.after_edit();
                    return KeyOutcome::Changed;
                }
                if self.buffer.is_empty() {
                    return KeyOutcome::Ignored;
                }
                self.buffer.clear();
                self.after_edit();
                KeyOutcome::Changed
            }
        }
    }

    /// Type a character at the end of the edit buffer.
    pub fn insert_char(&mut self, c: char) -> KeyOutcome {
        if self.buffer.chars().count() >= C::MAX_INPUT || self.buffer.push(c).is_err() {
            return KeyOutcome::Bell;
        }
        self.after_edit();
        KeyOutcome::Changed
    }

    /// Replace the edit buffer with `text` (a direct edit).
    ///
    /// Rejected with `Bell`, leaving the buffer untouched, if `text` does not fit.
    pub fn set_buffer(&mut self, text: &str) -> KeyOutcome {
        if text.chars().count() > C::MAX_INPUT || text.len() > INPUT_CAPACITY {
            return KeyOutcome::Bell;
        }
        self.buffer.clear();
        // Length checked above
        let _ = self.buffer.push_str(text);
        self.after_edit();
        KeyOutcome::Changed
    }

    fn handle_tab(&mut self) -> KeyOutcome {
        if self.mode == InputMode::Credentials {
            return KeyOutcome::Ignored;
        }
        let Some(first) = self.suggestions.first().copied() else {
            return KeyOutcome::Ignored;
        };

        self.set_buffer(&format!("/{}", first))
    }

    /// Load a recalled line into the edit buffer.
    ///
    /// Lines longer than `C::MAX_INPUT` (possible through [`submit`](Self::submit))
    /// are cut at the limit and reported with `Bell`.
    fn apply_recall(&mut self, recalled: Option<String>) -> KeyOutcome {
        let Some(text) = recalled else {
            return KeyOutcome::Ignored;
        };

        // Keep the recall cursor: this is not a direct edit
        self.buffer.clear();
        let mut truncated = false;
        for (i, c) in text.chars().enumerate() {
            if i >= C::MAX_INPUT || self.buffer.push(c).is_err() {
                truncated = true;
                break;
            }
        }
        self.refresh_suggestions();

        if truncated {
            log::debug!("recalled line cut to {} chars", self.buffer.chars().count());
            KeyOutcome::Bell
        } else {
            KeyOutcome::Changed
        }
    }

    fn after_edit(&mut self) {
        self.log.reset_position();
        self.refresh_suggestions();
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = if self.mode == InputMode::Credentials {
            Vec::new()
        } else {
            compute_suggestions(&self.registry, &self.buffer, &self.session)
        };
    }

    // ========================================
    // Session
    // ========================================

    /// Replace the session snapshot (called from the provider subscription).
    ///
    /// Recomputes suggestions. A change of authenticated state is announced in
    /// the display history; repeated notifications are silent.
    pub fn set_session(&mut self, session: Session) {
        let was_authenticated = self.session.is_authenticated();
        self.session = session;

        match (was_authenticated, self.session.identity()) {
            (false, Some(identity)) => {
                log::info!("session active for {}", identity.email);
                let message = format!(
                    "Authenticated as {}. Developer commands unlocked.",
                    identity.email
                );
                self.display.push(HistoryEntry::Output(message));
                if self.mode == InputMode::Credentials {
                    self.mode = InputMode::Command;
                    self.buffer.clear();
                }
            }
            (true, None) => {
                log::info!("session ended");
                self.display.push(HistoryEntry::Output("Signed out.".to_string()));
            }
            _ => {}
        }

        self.refresh_suggestions();
    }

    /// Install a session that predates this terminal (startup restore).
    ///
    /// Unlike [`set_session`](Self::set_session) nothing is announced.
    pub fn restore_session(&mut self, session: Session) {
        if let Some(identity) = session.identity() {
            log::info!("restored session for {}", identity.email);
        }
        self.session = session;
        self.refresh_suggestions();
    }

    /// Show a failed sign-in; the provider message is relayed verbatim.
    pub fn report_auth_failure(&mut self, message: &str) {
        self.display.push(HistoryEntry::Error(
            CliError::AuthenticationFailed(message.to_string()).to_string(),
        ));
    }

    /// Drain queued auth work.
    pub fn take_auth_requests(&mut self) -> Vec<AuthRequest> {
        core::mem::take(&mut self.pending)
    }

    // ========================================
    // Accessors
    // ========================================

    /// Current edit buffer.
    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    /// Recall index into the command log (`None` when typing freely).
    pub fn history_index(&self) -> Option<usize> {
        self.log.position()
    }

    /// Submitted-line log.
    pub fn log(&self) -> &CommandHistoryLog {
        &self.log
    }

    /// Display history.
    pub fn display(&self) -> &[HistoryEntry] {
        &self.display
    }

    /// Number of display resets so far.
    pub fn clear_generation(&self) -> u64 {
        self.clear_generation
    }

    /// Session snapshot.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Suggestions for the current buffer.
    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    /// Inline completion hint for the current buffer.
    pub fn ghost_text(&self) -> &'static str {
        ghost_text(&self.buffer, &self.suggestions)
    }

    /// Input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Prompt for the current mode.
    pub fn prompt(&self) -> &'static str {
        match self.mode {
            InputMode::Command => C::PROMPT,
            InputMode::Credentials => C::CREDENTIALS_PROMPT,
        }
    }

    /// Command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// True while auth work is queued.
    pub fn has_pending_auth(&self) -> bool {
        !self.pending.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
