//! Submitted-line log with up/down arrow recall.
//!
//! Every non-empty submitted line is recorded, valid or not, in order. The
//! log is also the source for `/secret` analytics (count, first, last).

/// Outcome of a recall step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Put this entry in the edit buffer
    Entry(&'a str),

    /// Moved past the newest entry: clear the edit buffer
    Fresh,

    /// Nothing to do
    Unchanged,
}

/// Ordered log of submitted lines plus the recall cursor.
#[derive(Debug, Clone, Default)]
pub struct CommandHistoryLog {
    entries: Vec<String>,
    position: Option<usize>,
}

impl CommandHistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            position: None,
        }
    }

    /// Record a submitted line verbatim and leave recall mode.
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.position = None;
    }

    /// Navigate to the previous (older) entry (up arrow).
    ///
    /// From a fresh line this jumps to the newest entry; at the oldest entry
    /// it stays put.
    pub fn previous_command(&mut self) -> Recall<'_> {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }

        let pos = match self.position {
            None => self.entries.len() - 1,
            Some(p) => p.saturating_sub(1),
        };

        self.position = Some(pos);
        Recall::Entry(&self.entries[pos])
    }

    /// Navigate to the next (newer) entry (down arrow).
    ///
    /// Only moves while recalling. Stepping past the newest entry returns to a
    /// fresh line.
    pub fn next_command(&mut self) -> Recall<'_> {
        let Some(p) = self.position else {
            return Recall::Unchanged;
        };

        let pos = p + 1;
        if pos >= self.entries.len() {
            self.position = None;
            return Recall::Fresh;
        }

        self.position = Some(pos);
        Recall::Entry(&self.entries[pos])
    }

    /// Leave recall mode.
    pub fn reset_position(&mut self) {
        self.position = None;
    }

    /// Current recall index (`None` when not recalling).
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was submitted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest recorded line.
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// Newest recorded line.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// All recorded lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
