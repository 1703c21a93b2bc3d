//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use fixtures::MockIo;
use termfolio::auth::AuthProvider;
use termfolio::config::DefaultConfig;
use termfolio::portfolio::{self, PortfolioHandlers};
use termfolio::shell::{Console, InputEvent};
use termfolio::{HistoryEntry, Terminal};

/// Portfolio terminal with the default config.
pub type TestTerminal = Terminal<PortfolioHandlers, DefaultConfig>;

/// Console over MockIo with the portfolio commands.
pub type TestConsole<'p, P> = Console<'p, P, MockIo, PortfolioHandlers, DefaultConfig>;

// ============================================================================
// Terminal Helpers
// ============================================================================

/// Create a fresh portfolio terminal.
pub fn create_terminal() -> TestTerminal {
    portfolio::terminal::<DefaultConfig>()
}

/// Type input without submitting.
pub fn type_input(term: &mut TestTerminal, input: &str) {
    for c in input.chars() {
        term.on_key(InputEvent::Char(c));
    }
}

/// Press Enter.
pub fn press_enter(term: &mut TestTerminal) {
    term.on_key(InputEvent::Enter);
}

/// Type and submit each line through the key path.
pub fn submit_all(term: &mut TestTerminal, lines: &[&str]) {
    for line in lines {
        type_input(term, line);
        press_enter(term);
    }
}

/// Last display entry.
pub fn last_entry(term: &TestTerminal) -> &HistoryEntry {
    term.display().last().expect("display history is empty")
}

// ============================================================================
// Console Helpers
// ============================================================================

/// Create an activated console with its output cleared.
pub fn create_console<P: AuthProvider>(provider: &P) -> TestConsole<'_, P> {
    let mut console = Console::new(create_terminal(), provider, MockIo::new());
    console.activate().unwrap();
    console.io_mut().clear_output();
    console
}

/// Feed a line plus CR through the async console path.
pub async fn enter_line<P: AuthProvider>(console: &mut TestConsole<'_, P>, line: &str) {
    for c in line.chars() {
        console.process_char_async(c).await.unwrap();
    }
    console.process_char_async('\r').await.unwrap();
}

/// Run the full `/login` + credentials exchange.
pub async fn login<P: AuthProvider>(console: &mut TestConsole<'_, P>, email: &str, password: &str) {
    enter_line(console, "/login").await;
    enter_line(console, &format!("{}:{}", email, password)).await;
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for s in expected {
        assert!(
            output.contains(s),
            "Expected output to contain {:?}\nActual output: {:?}",
            s,
            output
        );
    }
}

/// Assert that output does NOT contain any of the strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for s in forbidden {
        assert!(
            !output.contains(s),
            "Expected output NOT to contain {:?}\nActual output: {:?}",
            s,
            output
        );
    }
}

/// Text of every display entry joined by newlines.
pub fn display_text(term: &TestTerminal) -> String {
    term.display()
        .iter()
        .map(HistoryEntry::text)
        .collect::<Vec<_>>()
        .join("\n")
}
