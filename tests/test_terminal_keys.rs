//! Key handling tests: recall, tab completion, ghost text and direct edits.

#[path = "helpers.rs"]
mod helpers;

use helpers::{create_terminal, press_enter, submit_all, type_input};
use termfolio::auth::{Identity, Session};
use termfolio::config::{MinimalConfig, ShellConfig};
use termfolio::portfolio::{PortfolioHandlers, REGISTRY};
use termfolio::shell::InputEvent;
use termfolio::{KeyOutcome, Terminal};

fn signed_in() -> Session {
    Session::signed_in(Identity::new("user-1", "dev@example.com", chrono::Utc::now()))
}

// ============================================================================
// History Recall
// ============================================================================

#[test]
fn test_recall_walkthrough() {
    let mut term = create_terminal();
    submit_all(&mut term, &["/help", "/me", "/resume"]);
    assert_eq!(term.history_index(), None);

    term.on_key(InputEvent::UpArrow);
    assert_eq!(term.buffer(), "/resume");
    assert_eq!(term.history_index(), Some(2));

    term.on_key(InputEvent::UpArrow);
    assert_eq!(term.buffer(), "/me");
    assert_eq!(term.history_index(), Some(1));

    term.on_key(InputEvent::DownArrow);
    assert_eq!(term.buffer(), "/resume");
    assert_eq!(term.history_index(), Some(2));

    term.on_key(InputEvent::DownArrow);
    assert_eq!(term.buffer(), "");
    assert_eq!(term.history_index(), None);
}

#[test]
fn test_up_floors_at_oldest() {
    let mut term = create_terminal();
    submit_all(&mut term, &["/help", "/me"]);

    for _ in 0..5 {
        term.on_key(InputEvent::UpArrow);
    }
    assert_eq!(term.buffer(), "/help");
    assert_eq!(term.history_index(), Some(0));
}

#[test]
fn test_arrows_on_empty_log_do_nothing() {
    let mut term = create_terminal();
    type_input(&mut term, "/he");

    assert_eq!(term.on_key(InputEvent::UpArrow), KeyOutcome::Ignored);
    assert_eq!(term.on_key(InputEvent::DownArrow), KeyOutcome::Ignored);
    assert_eq!(term.buffer(), "/he");
}

#[test]
fn test_down_without_recall_keeps_buffer() {
    let mut term = create_terminal();
    submit_all(&mut term, &["/help"]);
    type_input(&mut term, "/m");

    assert_eq!(term.on_key(InputEvent::DownArrow), KeyOutcome::Ignored);
    assert_eq!(term.buffer(), "/m");
}

#[test]
fn test_recall_includes_invalid_and_denied_lines() {
    let mut term = create_terminal();
    submit_all(&mut term, &["oops", "/whoami", "/clear"]);

    term.on_key(InputEvent::UpArrow);
    assert_eq!(term.buffer(), "/clear");
    term.on_key(InputEvent::UpArrow);
    assert_eq!(term.buffer(), "/whoami");
    term.on_key(InputEvent::UpArrow);
    assert_eq!(term.buffer(), "oops");
}

#[test]
fn test_direct_edit_resets_history_index() {
    let mut term = create_terminal();
    submit_all(&mut term, &["/help", "/me"]);

    term.on_key(InputEvent::UpArrow);
    term.on_key(InputEvent::UpArrow);
    assert_eq!(term.history_index(), Some(0));

    term.on_key(InputEvent::Char('x'));
    assert_eq!(term.history_index(), None);
    assert_eq!(term.buffer(), "/helpx");

    // Next Up starts from the newest entry again
    term.on_key(InputEvent::UpArrow);
    assert_eq!(term.buffer(), "/me");

    term.on_key(InputEvent::Backspace);
    assert_eq!(term.history_index(), None);
}

#[test]
fn test_enter_on_recalled_line_resubmits_it() {
    let mut term = create_terminal();
    submit_all(&mut term, &["/help", "/me"]);

    term.on_key(InputEvent::UpArrow);
    term.on_key(InputEvent::UpArrow);
    press_enter(&mut term);

    assert_eq!(term.log().entries(), &["/help", "/me", "/help"]);
    assert_eq!(term.buffer(), "");
    assert_eq!(term.history_index(), None);
}

// ============================================================================
// Tab Completion and Ghost Text
// ============================================================================

#[test]
fn test_tab_completes_first_suggestion() {
    let mut term = create_terminal();
    type_input(&mut term, "/h");
    assert_eq!(term.suggestions(), &["help"]);

    assert_eq!(term.on_key(InputEvent::Tab), KeyOutcome::Changed);
    assert_eq!(term.buffer(), "/help");
    assert_eq!(term.ghost_text(), "");
}

#[test]
fn test_tab_uses_registry_order_for_ties() {
    let mut term = create_terminal();
    term.set_session(signed_in());
    type_input(&mut term, "/d");
    assert_eq!(term.suggestions(), &["download", "dev"]);

    term.on_key(InputEvent::Tab);
    assert_eq!(term.buffer(), "/download");

    // No cycling
    term.on_key(InputEvent::Tab);
    assert_eq!(term.buffer(), "/download");
}

#[test]
fn test_tab_without_suggestions_is_noop() {
    let mut term = create_terminal();
    type_input(&mut term, "/zz");
    assert_eq!(term.on_key(InputEvent::Tab), KeyOutcome::Ignored);
    assert_eq!(term.buffer(), "/zz");

    let mut term = create_terminal();
    type_input(&mut term, "help");
    assert_eq!(term.on_key(InputEvent::Tab), KeyOutcome::Ignored);
}

#[test]
fn test_slash_alone_suggests_visible_set() {
    let mut term = create_terminal();
    type_input(&mut term, "/");
    assert_eq!(
        term.suggestions(),
        &[
            "help", "me", "resume", "contact", "skills", "certifications", "download", "clear",
            "login"
        ]
    );
    assert_eq!(term.ghost_text(), "");

    term.set_session(signed_in());
    assert_eq!(term.suggestions().len(), 13);
}

#[test]
fn test_ghost_text_follows_typing() {
    let mut term = create_terminal();
    type_input(&mut term, "/ce");
    assert_eq!(term.ghost_text(), "rtifications");

    type_input(&mut term, "rtifications");
    assert_eq!(term.ghost_text(), "");

    term.on_key(InputEvent::DoubleEsc);
    assert_eq!(term.buffer(), "");
    assert!(term.suggestions().is_empty());
}

#[test]
fn test_ghost_text_is_advisory() {
    let mut term = create_terminal();
    type_input(&mut term, "/he");
    assert_eq!(term.ghost_text(), "lp");
    press_enter(&mut term);

    assert_eq!(term.log().last(), Some("/he"));
    assert!(matches!(
        term.display().last(),
        Some(termfolio::HistoryEntry::Error(e)) if e.starts_with("Command not found: /he.")
    ));
}

#[test]
fn test_developer_suggestions_follow_session() {
    let mut term = create_terminal();
    type_input(&mut term, "/s");
    assert_eq!(term.suggestions(), &["skills"]);

    term.set_session(signed_in());
    assert_eq!(term.suggestions(), &["skills", "secret"]);

    term.set_session(Session::anonymous());
    assert_eq!(term.suggestions(), &["skills"]);
}

#[test]
fn test_login_always_suggested() {
    let mut term = create_terminal();
    type_input(&mut term, "/lo");
    assert_eq!(term.suggestions(), &["login"]);

    term.set_session(signed_in());
    assert_eq!(term.suggestions(), &["login", "logout"]);
}

// ============================================================================
// Buffer Limits
// ============================================================================

#[test]
fn test_input_limit_rings_bell() {
    let mut term: Terminal<PortfolioHandlers, MinimalConfig> =
        Terminal::new(REGISTRY, PortfolioHandlers);

    for _ in 0..MinimalConfig::MAX_INPUT {
        assert_eq!(term.on_key(InputEvent::Char('a')), KeyOutcome::Changed);
    }
    assert_eq!(term.on_key(InputEvent::Char('a')), KeyOutcome::Bell);
    assert_eq!(term.buffer().chars().count(), MinimalConfig::MAX_INPUT);
}

#[test]
fn test_set_buffer_is_a_direct_edit() {
    let mut term = create_terminal();
    submit_all(&mut term, &["/help"]);
    term.on_key(InputEvent::UpArrow);

    assert_eq!(term.set_buffer("/co"), KeyOutcome::Changed);
    assert_eq!(term.history_index(), None);
    assert_eq!(term.suggestions(), &["contact"]);
}

#[test]
fn test_recall_respects_input_limit() {
    let mut term: Terminal<PortfolioHandlers, MinimalConfig> =
        Terminal::new(REGISTRY, PortfolioHandlers);
    let long = format!("/{}", "x".repeat(MinimalConfig::MAX_INPUT + 10));
    term.submit(&long);
    term.submit("/me");

    assert_eq!(term.on_key(InputEvent::UpArrow), KeyOutcome::Changed);
    assert_eq!(term.buffer(), "/me");

    assert_eq!(term.on_key(InputEvent::UpArrow), KeyOutcome::Bell);
    assert_eq!(term.buffer().chars().count(), MinimalConfig::MAX_INPUT);
    assert!(long.starts_with(term.buffer()));
    assert_eq!(term.history_index(), Some(0));

    // The log keeps the full line
    assert_eq!(term.log().first(), Some(long.as_str()));

    assert_eq!(term.on_key(InputEvent::DownArrow), KeyOutcome::Changed);
    assert_eq!(term.buffer(), "/me");
}

#[test]
fn test_recall_then_type_and_recall_again() {
    let mut term = create_terminal();
    submit_all(&mut term, &["/help", "/me"]);

    term.on_key(InputEvent::UpArrow);
    type_input(&mut term, "x");
    assert_eq!(term.buffer(), "/mex");

    term.on_key(InputEvent::UpArrow);
    term.on_key(InputEvent::UpArrow);
    assert_eq!(term.buffer(), "/help");
    assert_eq!(term.on_key(InputEvent::DownArrow), KeyOutcome::Changed);
    assert_eq!(term.buffer(), "/me");
}
