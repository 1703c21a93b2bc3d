//! Character I/O abstraction used by the screen renderer.
//!
//! The interpreter itself never performs I/O. `CharIo` is the seam between the
//! rendered terminal and whatever carries the characters: a raw-mode stdio in
//! the native binary, an in-memory capture in tests.

/// Platform-agnostic character I/O trait.
///
/// Writes may be buffered; callers flush through the implementation's own
/// mechanism after a batch of output.
pub trait CharIo {
    /// Platform-specific error type
    type Error;

    /// Non-blocking character read.
    ///
    /// Returns `Ok(None)` when no character is available.
    fn get_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Write a single character.
    fn put_char(&mut self, c: char) -> Result<(), Self::Error>;

    /// Write a string.
    ///
    /// Default implementation uses `put_char()` repeatedly.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for c in s.chars() {
            self.put_char(c)?;
        }
        Ok(())
    }
}
