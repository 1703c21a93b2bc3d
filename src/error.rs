//! Error types for interpreter and configuration failures.
//!
//! `CliError` covers everything the interpreter reports back to the user. None of
//! these are program faults: the terminal renders them as `Error` display entries
//! and stays usable. `ConfigError` covers loading the runtime site configuration.

use std::io;

/// Interpreter error type.
///
/// The `Display` output of each variant is the exact text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    /// Input did not start with `/` (carries the raw line)
    #[error("Invalid input: {0}. Commands must start with /. Type /help for available commands.")]
    InvalidInput(String),

    /// No registered command with that name (carries the raw line)
    #[error("Command not found: {0}. Type /help for available commands.")]
    CommandNotFound(String),

    /// Developer command issued without an authenticated session
    #[error("Access denied. Developer command requires authentication. Use /login to access.")]
    NotAuthenticated,

    /// Sign-in rejected; message relayed verbatim from the auth provider
    #[error("{0}")]
    AuthenticationFailed(String),

    /// Credential line without an `email:password` delimiter
    #[error("Invalid credentials format. Use email:password")]
    InvalidLoginFormat,

    /// Command executed but reported failure
    #[error("{0}")]
    CommandFailed(String),
}

/// Errors produced while loading a [`SiteConfig`](crate::config::SiteConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file is not valid TOML for this schema
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Entry could not be written as TOML
    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// Parsed, but a value is unusable (bad hex, duplicate email)
    #[error("invalid config: {0}")]
    Invalid(String),
}
