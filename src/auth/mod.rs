//! Authentication: session state and the auth provider contract.
//!
//! This module provides:
//! - `Identity` and `Session` (read-only to the interpreter)
//! - `AuthProvider`, the contract for the external sign-in service
//! - `SessionListeners` / `Subscription` for session change notification
//! - Password hashing and a local credential-backed provider (feature-gated: `local-auth`)
//!
//! The interpreter never talks to a provider directly. It queues requests that
//! a [`Console`](crate::shell::console::Console) drives, and it learns about
//! session changes through a subscription.

use chrono::{DateTime, Utc};

// Sub-modules
pub mod listeners;

#[cfg(feature = "local-auth")]
pub mod password;

#[cfg(feature = "local-auth")]
pub mod providers;

// Re-exports
pub use listeners::{SessionListener, SessionListeners, Subscription};

#[cfg(feature = "local-auth")]
pub use password::Sha256Hasher;

#[cfg(feature = "local-auth")]
pub use providers::{Credential, LocalAuthProvider};

/// Authenticated user as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider-assigned user id
    pub id: String,

    /// Sign-in email
    pub email: String,

    /// When the current session was established
    pub last_sign_in_at: DateTime<Utc>,
}

impl Identity {
    /// Create an identity.
    pub fn new(id: &str, email: &str, last_sign_in_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            last_sign_in_at,
        }
    }
}

/// Authentication state as seen by the interpreter.
///
/// Owned by the auth provider; the terminal holds a snapshot that is replaced
/// whenever the provider reports a change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// Session with nobody signed in.
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    /// Session for a signed-in identity.
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    /// True when an identity is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

impl From<Option<Identity>> for Session {
    fn from(identity: Option<Identity>) -> Self {
        Self { identity }
    }
}

/// Sign-in failure reported by an auth provider.
///
/// The `Display` text is relayed to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Unknown email or wrong password (intentionally not distinguished)
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Email or password left empty
    #[error("Email and password are required")]
    MissingCredentials,

    /// Provider-specific failure
    #[error("{0}")]
    Provider(String),
}

/// Auth provider contract.
///
/// Implemented by whatever service issues sessions. Uses `async fn` without
/// `Send` bounds, so both current-thread and multi-threaded executors work.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    /// Identity of a previously established session, if one survives.
    async fn get_session(&self) -> Option<Identity>;

    /// Register a listener called after every sign-in or sign-out completes.
    ///
    /// The listener stays registered until the returned handle is dropped or
    /// [`Subscription::unsubscribe`] is called.
    fn on_session_change(&self, listener: SessionListener) -> Subscription;

    /// Attempt an email/password sign-in.
    async fn sign_in_with_password(&self, email: &str, password: &str)
    -> Result<Identity, AuthError>;

    /// End the current session. A no-op when nobody is signed in.
    async fn sign_out(&self);
}

/// Password hasher trait (requires `local-auth` feature).
///
/// Must use constant-time comparison for verification.
#[cfg(feature = "local-auth")]
pub trait PasswordHasher {
    /// Hash password with salt. Returns 32-byte hash.
    fn hash(&self, password: &str, salt: &[u8]) -> [u8; 32];

    /// Verify password against hash using constant-time comparison.
    fn verify(&self, password: &str, salt: &[u8], hash: &[u8; 32]) -> bool;
}
