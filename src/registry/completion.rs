//! Prefix completion and ghost-text hints for slash commands.
//!
//! Both functions are pure: the terminal recomputes suggestions after every
//! edit and every session change, and derives the ghost text on each render.

use crate::auth::Session;
use crate::registry::CommandRegistry;

/// Suggest command names for the edit buffer.
///
/// Only input starting with `/` gets suggestions. The text after the slash is
/// trimmed and matched as a case-insensitive prefix against the commands
/// visible under `session`, in registry order. An empty query matches the
/// whole visible set.
///
/// ```rust,ignore
/// let s = compute_suggestions(&registry, "/h", &Session::anonymous());
/// assert_eq!(s, vec!["help"]);
/// ```
pub fn compute_suggestions(
    registry: &CommandRegistry,
    buffer: &str,
    session: &Session,
) -> Vec<&'static str> {
    let Some(query) = buffer.strip_prefix('/') else {
        return Vec::new();
    };
    let query = query.trim().to_lowercase();

    registry
        .visible(session)
        .map(|cmd| cmd.name)
        .filter(|name| name.to_lowercase().starts_with(&query))
        .collect()
}

/// Inline completion hint for the edit buffer.
///
/// Returns the untyped remainder of the first suggestion, or `""` when there
/// is no suggestion, the buffer is not a slash command, nothing has been typed
/// after the slash, or the typed text already equals the suggestion.
pub fn ghost_text<'a>(buffer: &str, suggestions: &[&'a str]) -> &'a str {
    let Some(top) = suggestions.first().copied() else {
        return "";
    };
    let Some(typed) = buffer.strip_prefix('/') else {
        return "";
    };
    let typed = typed.trim();

    if typed.is_empty() || typed.eq_ignore_ascii_case(top) {
        return "";
    }

    let prefix_matches = top
        .get(..typed.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(typed));
    if !prefix_matches {
        return "";
    }

    top.get(typed.len()..).unwrap_or("")
}
