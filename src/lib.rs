//! # termfolio
//!
//! Command interpreter for a portfolio terminal.
//!
//! **Key features:**
//! - **Slash commands** - Case-insensitive `/name` lookup in a const registry
//! - **Developer gate** - Commands unlocked by an authenticated session
//! - **Completion** - Prefix suggestions and inline ghost text
//! - **Recall** - Up/down arrow navigation over every submitted line
//! - **Pluggable auth** - Sessions come from an injected [`AuthProvider`]
//!
//! The interpreter ([`Terminal`]) is a synchronous state machine with no I/O.
//! [`Screen`](shell::Screen) renders it onto a [`CharIo`], and
//! [`Console`](shell::Console) binds both to an auth provider.
//!
//! ## Optional Features
//!
//! - `local-auth` (default) - Salted SHA-256 hashing and an in-process credential provider
//! - `native` - Raw-mode terminal binary (`termfolio`)
//! - `credgen` - Credential generator binary (`termfolio-credgen`)

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod io;

pub mod auth;

pub mod error;

pub mod registry;

pub mod response;

pub mod shell;

pub mod portfolio;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core I/O
pub use io::CharIo;

// Configuration
pub use config::{DefaultConfig, MinimalConfig, ShellConfig, SiteConfig};

// Error types
pub use error::{CliError, ConfigError};

// Registry
pub use registry::{Access, CommandKind, CommandMeta, CommandRegistry};

// Auth contract
pub use auth::{AuthError, AuthProvider, Identity, Session, Subscription};

// Results
pub use response::{CommandResult, HistoryEntry};

// Interpreter
pub use shell::handler::{CommandContext, CommandHandler};
pub use shell::{AuthRequest, InputMode, KeyOutcome, Terminal};

#[cfg(feature = "local-auth")]
pub use auth::{Credential, LocalAuthProvider, PasswordHasher, Sha256Hasher};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
