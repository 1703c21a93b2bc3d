//! Test fixtures for termfolio integration tests.
//!
//! Provides:
//! - `MockIo`: in-memory CharIo with input queue and output capture
//! - `test_provider()`: LocalAuthProvider with two accounts and fixed salts
//! - `OfflineProvider`: AuthProvider whose sign-in always fails with a provider message

#![allow(dead_code)]

use std::collections::VecDeque;

use termfolio::CharIo;
use termfolio::auth::{
    AuthError, AuthProvider, Credential, Identity, LocalAuthProvider, SessionListener,
    SessionListeners, Sha256Hasher, Subscription,
};

// ============================================================================
// MockIo - Test I/O Implementation
// ============================================================================

/// Mock I/O for testing.
///
/// Provides in-memory character I/O with input queue and output capture.
#[derive(Debug, Default)]
pub struct MockIo {
    /// Input queue (simulates user typing)
    input: VecDeque<char>,

    /// Output capture (collects all output)
    output: String,
}

impl MockIo {
    /// Create new MockIo with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create MockIo with pre-loaded input string.
    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            output: String::new(),
        }
    }

    /// Add input to queue (simulates user typing).
    pub fn push_input(&mut self, s: &str) {
        self.input.extend(s.chars());
    }

    /// Get captured output.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Check if input queue is empty.
    pub fn input_empty(&self) -> bool {
        self.input.is_empty()
    }
}

impl CharIo for MockIo {
    type Error = ();

    fn get_char(&mut self) -> Result<Option<char>, Self::Error> {
        Ok(self.input.pop_front())
    }

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        self.output.push(c);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.output.push_str(s);
        Ok(())
    }
}

// ============================================================================
// Auth Providers
// ============================================================================

pub const DEV_EMAIL: &str = "dev@example.com";
pub const DEV_PASSWORD: &str = "pass123";
pub const DEV_ID: &str = "user-dev-1";

pub const OPS_EMAIL: &str = "ops@example.com";
pub const OPS_PASSWORD: &str = "ops456";

/// Local provider with two developer accounts.
pub fn test_provider() -> LocalAuthProvider<Sha256Hasher> {
    let hasher = Sha256Hasher::new();
    let users = vec![
        Credential::with_password(&hasher, DEV_ID, DEV_EMAIL, DEV_PASSWORD, [1u8; 16]),
        Credential::with_password(&hasher, "user-ops-2", OPS_EMAIL, OPS_PASSWORD, [2u8; 16]),
    ];
    LocalAuthProvider::new(users, hasher)
}

/// Provider standing in for an unreachable hosted service.
#[derive(Debug, Default)]
pub struct OfflineProvider {
    listeners: SessionListeners,
}

pub const OFFLINE_MESSAGE: &str = "Failed to fetch";

impl AuthProvider for OfflineProvider {
    async fn get_session(&self) -> Option<Identity> {
        None
    }

    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_in_with_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Identity, AuthError> {
        Err(AuthError::Provider(OFFLINE_MESSAGE.to_string()))
    }

    async fn sign_out(&self) {}
}
