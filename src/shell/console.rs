//! Character-driven front end: decoder, terminal, renderer and auth provider.
//!
//! `Console` is where the pure [`Terminal`] meets the outside world. It feeds
//! decoded keys to the terminal, runs queued sign-in and sign-out requests
//! against the [`AuthProvider`], forwards provider session notifications into
//! the terminal, and renders the result through a [`CharIo`].
//!
//! The provider subscription is established in [`Console::new`] and torn down
//! when the console is dropped.

use std::sync::mpsc::{self, Receiver};

use crate::auth::{AuthProvider, Session, Subscription};
use crate::config::ShellConfig;
use crate::io::CharIo;
use crate::shell::decoder::InputDecoder;
use crate::shell::handler::CommandHandler;
use crate::shell::screen::Screen;
use crate::shell::{AuthRequest, KeyOutcome, Terminal};

/// Interactive console over a character device.
///
/// Generic over:
/// - `P`: AuthProvider implementation
/// - `IO`: CharIo implementation
/// - `H`: CommandHandler implementation
/// - `C`: ShellConfig implementation
pub struct Console<'p, P, IO, H, C>
where
    P: AuthProvider,
    IO: CharIo,
    H: CommandHandler,
    C: ShellConfig,
{
    terminal: Terminal<H, C>,
    screen: Screen,
    decoder: InputDecoder,
    io: IO,
    provider: &'p P,
    sessions: Receiver<Session>,
    _subscription: Subscription,
}

impl<'p, P, IO, H, C> core::fmt::Debug for Console<'p, P, IO, H, C>
where
    P: AuthProvider,
    IO: CharIo,
    H: CommandHandler,
    C: ShellConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Console")
            .field("terminal", &self.terminal)
            .field("screen", &self.screen)
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl<'p, P, IO, H, C> Console<'p, P, IO, H, C>
where
    P: AuthProvider,
    IO: CharIo,
    H: CommandHandler,
    C: ShellConfig,
{
    /// Create a console and subscribe to provider session changes.
    pub fn new(terminal: Terminal<H, C>, provider: &'p P, io: IO) -> Self {
        Self::with_screen(terminal, Screen::new(), provider, io)
    }

    /// Create a console with a preconfigured renderer (e.g. a runtime prompt).
    pub fn with_screen(terminal: Terminal<H, C>, screen: Screen, provider: &'p P, io: IO) -> Self {
        let (tx, sessions) = mpsc::channel();
        let subscription = provider.on_session_change(Box::new(move |session: &Session| {
            // Receiver gone means the console is being dropped
            let _ = tx.send(session.clone());
        }));

        Self {
            terminal,
            screen,
            decoder: InputDecoder::new(),
            io,
            provider,
            sessions,
            _subscription: subscription,
        }
    }

    /// Show the welcome banner and the first prompt.
    pub fn activate(&mut self) -> Result<(), IO::Error> {
        self.screen.welcome::<C, IO>(&mut self.io)?;
        self.screen.render(&self.terminal, &mut self.io)
    }

    /// Adopt a session that survived from earlier (provider `get_session`).
    ///
    /// A restored session is installed silently, without the unlock message.
    pub async fn restore_session(&mut self) -> Result<(), IO::Error> {
        if let Some(identity) = self.provider.get_session().await {
            self.terminal.restore_session(Session::signed_in(identity));
        }
        self.screen.render(&self.terminal, &mut self.io)
    }

    /// Process a single character of input.
    ///
    /// Auth requests raised by this key stay queued until
    /// [`run_auth_requests`](Self::run_auth_requests) is awaited.
    pub fn process_char(&mut self, c: char) -> Result<KeyOutcome, IO::Error> {
        let event = self.decoder.decode_char(c);
        log::trace!("key {:?}", event);

        self.apply_session_updates();
        let outcome = self.terminal.on_key(event);
        match outcome {
            KeyOutcome::Bell => self.screen.bell(&mut self.io)?,
            // Next line starts from a clean decoder
            KeyOutcome::Interrupt => self.decoder.reset(),
            _ => {}
        }

        self.screen.render(&self.terminal, &mut self.io)?;
        Ok(outcome)
    }

    /// Process a character and run any auth request it raised.
    pub async fn process_char_async(&mut self, c: char) -> Result<KeyOutcome, IO::Error> {
        let outcome = self.process_char(c)?;
        if self.terminal.has_pending_auth() {
            self.run_auth_requests().await?;
        }
        Ok(outcome)
    }

    /// Drive queued sign-in and sign-out requests through the provider.
    ///
    /// Failed sign-ins are reported in the display history; the resulting
    /// session changes arrive through the subscription.
    pub async fn run_auth_requests(&mut self) -> Result<(), IO::Error> {
        for request in self.terminal.take_auth_requests() {
            match request {
                AuthRequest::SignIn { email, password } => {
                    if let Err(e) = self.provider.sign_in_with_password(&email, &password).await {
                        log::debug!("sign-in failed for {}: {}", email, e);
                        self.terminal.report_auth_failure(&e.to_string());
                    }
                }
                AuthRequest::SignOut => self.provider.sign_out().await,
            }
        }

        self.apply_session_updates();
        self.screen.render(&self.terminal, &mut self.io)
    }

    /// Poll the device for one character and process it.
    ///
    /// Returns `None` when no character was available.
    pub async fn poll(&mut self) -> Result<Option<KeyOutcome>, IO::Error> {
        match self.io.get_char()? {
            Some(c) => self.process_char_async(c).await.map(Some),
            None => Ok(None),
        }
    }

    /// Apply session notifications delivered since the last call.
    pub fn apply_session_updates(&mut self) {
        while let Ok(session) = self.sessions.try_recv() {
            self.terminal.set_session(session);
        }
    }

    /// The interpreter.
    pub fn terminal(&self) -> &Terminal<H, C> {
        &self.terminal
    }

    /// The interpreter, mutably (e.g. to submit a line programmatically).
    pub fn terminal_mut(&mut self) -> &mut Terminal<H, C> {
        &mut self.terminal
    }

    /// Redraw after changes made through [`terminal_mut`](Self::terminal_mut).
    pub fn render(&mut self) -> Result<(), IO::Error> {
        self.screen.render(&self.terminal, &mut self.io)
    }

    /// The character device.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// The character device, mutably.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }
}
