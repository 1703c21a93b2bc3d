//! Native raw-mode front end for the portfolio terminal.
//!
//! To run:
//! ```bash
//! cargo run --bin termfolio --features native -- termfolio.toml
//! ```
//!
//! The config path comes from the first argument, then `TERMFOLIO_CONFIG`,
//! then `termfolio.toml`. Without a config file there are no developer
//! accounts and `/login` always fails. Set `RUST_LOG=debug` to trace
//! submissions on stderr.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use env_logger::Env;
use std::io::{self, Read, Write};
use termfolio::{
    CharIo, DefaultConfig, KeyOutcome, SiteConfig,
    portfolio,
    shell::{Console, Screen},
};

const DEFAULT_CONFIG_PATH: &str = "termfolio.toml";

// =============================================================================
// Terminal Raw Mode Guard
// =============================================================================

/// Enables raw terminal mode on creation and restores it on drop.
///
/// Raw mode hands every key (Tab, arrows, ESC) to the interpreter and disables
/// local echo so credentials can be masked.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

// =============================================================================
// I/O Implementation
// =============================================================================

/// Blocking stdin/stdout character device with UTF-8 decoding.
struct StdioCharIo {
    stdin: io::Stdin,
    stdout: io::Stdout,
    eof: bool,
}

impl StdioCharIo {
    fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
            eof: false,
        }
    }

    fn at_eof(&self) -> bool {
        self.eof
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.stdin.lock().read(&mut buf) {
            Ok(0) => {
                self.eof = true;
                Ok(None)
            }
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Byte length of a UTF-8 sequence from its lead byte.
fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 1,
    }
}

impl CharIo for StdioCharIo {
    type Error = io::Error;

    fn get_char(&mut self) -> Result<Option<char>, Self::Error> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        let mut bytes = [lead, 0, 0, 0];
        let len = utf8_len(lead);
        for slot in bytes.iter_mut().take(len).skip(1) {
            match self.read_byte()? {
                Some(b) => *slot = b,
                None => return Ok(None),
            }
        }

        // Invalid sequences are dropped
        Ok(std::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|s| s.chars().next()))
    }

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        let mut out = self.stdout.lock();
        out.write_all(s.as_bytes())?;
        out.flush()
    }
}

// =============================================================================
// Main
// =============================================================================

fn config_path() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TERMFOLIO_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let path = config_path();
    let site = SiteConfig::load_or_default(&path)?;
    let provider = site.local_provider()?;
    log::info!("{} developer account(s) configured", provider.user_count());

    let screen = match &site.terminal.prompt {
        Some(prompt) => Screen::with_prompt(prompt.clone()),
        None => Screen::new(),
    };

    // Enable raw terminal mode
    let raw_mode_guard = RawModeGuard::new()?;

    let mut console = Console::with_screen(
        portfolio::terminal::<DefaultConfig>(),
        screen,
        &provider,
        StdioCharIo::new(),
    );

    console.activate()?;
    console.restore_session().await?;

    loop {
        match console.poll().await {
            Ok(Some(KeyOutcome::Interrupt)) => break,
            Ok(_) if console.io().at_eof() => break,
            Ok(_) => {}
            Err(e) => {
                // Restore terminal before printing error
                drop(raw_mode_guard);
                eprintln!("\nError reading input: {}", e);
                return Err(e.into());
            }
        }
    }

    console.io_mut().write_str("\r\n")?;
    Ok(())
}
