//! Credential-backed auth provider living in the same process.
//!
//! Credentials are loaded from the site config (see `termfolio-credgen`) and
//! never stored in plain text. Session state lives only in memory.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;

use crate::auth::{
    AuthError, AuthProvider, Identity, PasswordHasher, Session, SessionListener,
    SessionListeners, Subscription,
};

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Stable user id
    pub id: String,

    /// Sign-in email (matched case-insensitively)
    pub email: String,

    /// Salted password hash
    pub password_hash: [u8; 32],

    /// Salt for password hashing
    pub salt: [u8; 16],
}

impl Credential {
    /// Create a credential from a precomputed hash.
    pub fn new(id: &str, email: &str, password_hash: [u8; 32], salt: [u8; 16]) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            password_hash,
            salt,
        }
    }

    /// Hash `password` with `salt` and build the credential.
    pub fn with_password<H: PasswordHasher>(
        hasher: &H,
        id: &str,
        email: &str,
        password: &str,
        salt: [u8; 16],
    ) -> Self {
        Self::new(id, email, hasher.hash(password, &salt), salt)
    }
}

/// In-process auth provider.
///
/// Sign-in and sign-out complete immediately; listeners are notified before
/// the call returns.
pub struct LocalAuthProvider<H: PasswordHasher> {
    credentials: Vec<Credential>,
    hasher: H,
    current: Mutex<Option<Identity>>,
    listeners: SessionListeners,
}

impl<H: PasswordHasher> LocalAuthProvider<H> {
    /// Create a provider with no active session.
    pub fn new(credentials: Vec<Credential>, hasher: H) -> Self {
        Self {
            credentials,
            hasher,
            current: Mutex::new(None),
            listeners: SessionListeners::new(),
        }
    }

    /// Start with an already established session (as if restored from storage).
    pub fn with_active_session(self, identity: Identity) -> Self {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(identity);
        self
    }

    /// Number of registered accounts.
    pub fn user_count(&self) -> usize {
        self.credentials.len()
    }

    /// Number of live session subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn find(&self, email: &str) -> Option<&Credential> {
        self.credentials
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email))
    }

    fn set_current(&self, identity: Option<Identity>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = identity.clone();
        self.listeners.notify(&Session::from(identity));
    }
}

impl<H: PasswordHasher> AuthProvider for LocalAuthProvider<H> {
    async fn get_session(&self) -> Option<Identity> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let credential = match self.find(email) {
            Some(c) if self.hasher.verify(password, &c.salt, &c.password_hash) => c,
            _ => {
                log::warn!("rejected sign-in for {}", email);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let identity = Identity::new(&credential.id, &credential.email, Utc::now());
        log::info!("signed in {}", identity.email);
        self.set_current(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) {
        let was_signed_in = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();

        if was_signed_in {
            log::info!("signed out");
            self.set_current(None);
        }
    }
}

impl<H: PasswordHasher> fmt::Debug for LocalAuthProvider<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("LocalAuthProvider")
            .field("users", &self.credentials.len())
            .field("signed_in", &current.as_ref().map(|i| i.email.as_str()))
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::Sha256Hasher;
    use std::sync::Arc;

    fn provider() -> LocalAuthProvider<Sha256Hasher> {
        let hasher = Sha256Hasher::new();
        let users = vec![
            Credential::with_password(&hasher, "u-1", "dev@example.com", "pass123", [1u8; 16]),
            Credential::with_password(&hasher, "u-2", "ops@example.com", "ops456", [2u8; 16]),
        ];
        LocalAuthProvider::new(users, hasher)
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let provider = provider();
        let identity = provider
            .sign_in_with_password("dev@example.com", "pass123")
            .await
            .unwrap();

        assert_eq!(identity.id, "u-1");
        assert_eq!(identity.email, "dev@example.com");
        assert_eq!(provider.get_session().await, Some(identity));
    }

    #[tokio::test]
    async fn test_email_is_case_insensitive() {
        let provider = provider();
        let identity = provider
            .sign_in_with_password("  DEV@Example.com ", "pass123")
            .await
            .unwrap();
        assert_eq!(identity.email, "dev@example.com");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_alike() {
        let provider = provider();
        let wrong = provider.sign_in_with_password("dev@example.com", "nope").await;
        let unknown = provider.sign_in_with_password("who@example.com", "pass123").await;

        assert_eq!(wrong, Err(AuthError::InvalidCredentials));
        assert_eq!(unknown, Err(AuthError::InvalidCredentials));
        assert!(provider.get_session().await.is_none());
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let provider = provider();
        assert_eq!(
            provider.sign_in_with_password("", "pass123").await,
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            provider.sign_in_with_password("dev@example.com", "").await,
            Err(AuthError::MissingCredentials)
        );
    }

    #[tokio::test]
    async fn test_listeners_see_sign_in_and_sign_out() {
        let provider = provider();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = provider.on_session_change(Box::new(move |session| {
            sink.lock().unwrap().push(session.is_authenticated());
        }));

        provider
            .sign_in_with_password("ops@example.com", "ops456")
            .await
            .unwrap();
        provider.sign_out().await;
        // Second sign-out is a no-op
        provider.sign_out().await;

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_failed_sign_in_does_not_notify() {
        let provider = provider();
        let seen = Arc::new(Mutex::new(0usize));

        let sink = Arc::clone(&seen);
        let _sub = provider.on_session_change(Box::new(move |_| {
            *sink.lock().unwrap() += 1;
        }));

        let _ = provider.sign_in_with_password("dev@example.com", "bad").await;
        assert_eq!(*seen.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_active_session_restored() {
        let identity = Identity::new("u-9", "old@example.com", Utc::now());
        let provider = provider().with_active_session(identity.clone());
        assert_eq!(provider.get_session().await, Some(identity));
    }

    #[test]
    fn test_subscriber_count() {
        let provider = provider();
        assert_eq!(provider.user_count(), 2);

        let sub = provider.on_session_change(Box::new(|_| {}));
        assert_eq!(provider.subscriber_count(), 1);
        sub.unsubscribe();
        assert_eq!(provider.subscriber_count(), 0);
    }
}
