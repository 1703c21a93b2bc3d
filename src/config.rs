//! Configuration: compile-time shell settings and the runtime site file.
//!
//! The `ShellConfig` trait fixes prompt text, canned messages and the edit
//! buffer capacity at compile time. `SiteConfig` is the TOML file read by the
//! native front end (prompt override and the local credential store).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound on the edit buffer, shared by every `ShellConfig`.
///
/// The buffer is a `heapless::String<INPUT_CAPACITY>`; `ShellConfig::MAX_INPUT`
/// may lower the effective limit but never raise it.
pub const INPUT_CAPACITY: usize = 256;

/// Shell configuration trait.
///
/// All values are const (zero runtime cost).
pub trait ShellConfig {
    /// Prompt shown before the edit buffer
    const PROMPT: &'static str;

    /// Banner written when the screen is first drawn
    const MSG_WELCOME: &'static str;

    /// Output of `/login` when no session is active
    const MSG_CREDENTIALS_PROMPT: &'static str;

    /// Output when credential entry is cancelled with double-ESC
    const MSG_LOGIN_CANCELLED: &'static str;

    /// Prompt shown while entering credentials
    const CREDENTIALS_PROMPT: &'static str;

    /// Maximum edit buffer length in characters (at most `INPUT_CAPACITY`)
    const MAX_INPUT: usize;
}

/// Default configuration.
///
/// - PROMPT: `guest@portfolio:~$ `
/// - MAX_INPUT: 256 characters
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl ShellConfig for DefaultConfig {
    const PROMPT: &'static str = "guest@portfolio:~$ ";
    const MSG_WELCOME: &'static str =
        "Welcome to the portfolio terminal.\r\nType /help for available commands.\r\n";
    const MSG_CREDENTIALS_PROMPT: &'static str =
        "Developer login. Enter credentials as email:password (ESC ESC to cancel).";
    const MSG_LOGIN_CANCELLED: &'static str = "Login cancelled.";
    const CREDENTIALS_PROMPT: &'static str = "login: ";
    const MAX_INPUT: usize = INPUT_CAPACITY;
}

/// Minimal configuration with a short edit buffer.
///
/// - PROMPT: `$ `
/// - MAX_INPUT: 64 characters
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinimalConfig;

impl ShellConfig for MinimalConfig {
    const PROMPT: &'static str = "$ ";
    const MSG_WELCOME: &'static str = "Type /help.\r\n";
    const MSG_CREDENTIALS_PROMPT: &'static str = "email:password?";
    const MSG_LOGIN_CANCELLED: &'static str = "Cancelled.";
    const CREDENTIALS_PROMPT: &'static str = "> ";
    const MAX_INPUT: usize = 64;
}

/// Runtime configuration read from a TOML file.
///
/// ```toml
/// [terminal]
/// prompt = "visitor@portfolio:~$ "
///
/// [[auth.users]]
/// id = "7c1f0b2e"
/// email = "dev@example.com"
/// salt = "<32 hex chars>"
/// hash = "<64 hex chars>"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Front-end settings
    pub terminal: TerminalSection,

    /// Local credential store
    pub auth: AuthSection,
}

/// `[terminal]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TerminalSection {
    /// Overrides `ShellConfig::PROMPT` when set
    pub prompt: Option<String>,
}

/// `[auth]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthSection {
    /// Registered developer accounts
    pub users: Vec<UserRecord>,
}

/// One `[[auth.users]]` entry, as emitted by `termfolio-credgen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable user id
    pub id: String,

    /// Sign-in email
    pub email: String,

    /// 16-byte salt, hex encoded
    pub salt: String,

    /// 32-byte salted SHA-256 hash, hex encoded
    pub hash: String,
}

#[cfg(feature = "local-auth")]
impl UserRecord {
    /// Hash `password` with `salt` and build the entry.
    pub fn hashed(id: &str, email: &str, password: &str, salt: &[u8; 16]) -> Self {
        use crate::auth::PasswordHasher;

        let hash = crate::auth::Sha256Hasher::new().hash(password, salt);
        Self {
            id: id.to_string(),
            email: email.trim().to_string(),
            salt: encode_hex(salt),
            hash: encode_hex(&hash),
        }
    }
}

impl UserRecord {
    /// Render as a standalone `[[auth.users]]` table, ready to append to a site file.
    pub fn to_toml_entry(&self) -> Result<String, ConfigError> {
        #[derive(Serialize)]
        struct Entry<'a> {
            auth: Users<'a>,
        }

        #[derive(Serialize)]
        struct Users<'a> {
            users: &'a [UserRecord],
        }

        let entry = Entry {
            auth: Users {
                users: std::slice::from_ref(self),
            },
        };
        Ok(toml::to_string(&entry)?)
    }
}

impl SiteConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded site config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Like [`load`](Self::load), but a missing file yields the default config.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!(
                    "no site config at {}, developer login disabled",
                    path.as_ref().display()
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Prompt to display, falling back to the compile-time one.
    pub fn prompt_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.terminal.prompt.as_deref().unwrap_or(default)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (i, user) in self.auth.users.iter().enumerate() {
            if user.email.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("user {} has an empty email", i)));
            }
            decode_hex::<16>(&user.salt)
                .map_err(|e| ConfigError::Invalid(format!("{}: salt {}", user.email, e)))?;
            decode_hex::<32>(&user.hash)
                .map_err(|e| ConfigError::Invalid(format!("{}: hash {}", user.email, e)))?;

            let duplicate = self.auth.users[..i]
                .iter()
                .any(|other| other.email.eq_ignore_ascii_case(&user.email));
            if duplicate {
                return Err(ConfigError::Invalid(format!("duplicate user {}", user.email)));
            }
        }
        Ok(())
    }

    /// Build a [`LocalAuthProvider`](crate::auth::LocalAuthProvider) from `[[auth.users]]`.
    #[cfg(feature = "local-auth")]
    pub fn local_provider(
        &self,
    ) -> Result<crate::auth::LocalAuthProvider<crate::auth::Sha256Hasher>, ConfigError> {
        let mut credentials = Vec::with_capacity(self.auth.users.len());
        for user in &self.auth.users {
            let salt = decode_hex::<16>(&user.salt).map_err(ConfigError::Invalid)?;
            let hash = decode_hex::<32>(&user.hash).map_err(ConfigError::Invalid)?;
            credentials.push(crate::auth::Credential::new(&user.id, &user.email, hash, salt));
        }
        Ok(crate::auth::LocalAuthProvider::new(
            credentials,
            crate::auth::Sha256Hasher::new(),
        ))
    }
}

/// Lowercase hex encoding.
pub fn encode_hex(bytes: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode exactly `N` bytes of hex.
pub fn decode_hex<const N: usize>(text: &str) -> Result<[u8; N], String> {
    let text = text.trim();
    if text.len() != N * 2 {
        return Err(format!("expected {} hex chars, got {}", N * 2, text.len()));
    }

    let mut out = [0u8; N];
    for (i, pair) in text.as_bytes().chunks(2).enumerate() {
        let hi = hex_value(pair[0]).ok_or_else(|| format!("invalid hex digit at {}", i * 2))?;
        let lo = hex_value(pair[1]).ok_or_else(|| format!("invalid hex digit at {}", i * 2 + 1))?;
        out[i] = (hi << 4) | lo;
    }
    Ok(out)
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
