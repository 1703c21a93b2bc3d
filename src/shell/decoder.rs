//! Key decoder for raw terminal input.
//!
//! Turns the character stream of a raw-mode terminal into the discrete key
//! events the interpreter understands. Handles CSI (`ESC [`) and SS3 (`ESC O`)
//! cursor sequences, including parameterized ones such as `ESC [ 1 ; 5 A`,
//! folds `CR LF` into a single Enter, and reports double-ESC.
//!
//! Pure state machine: no buffers, no I/O.

/// Decoder state for escape sequence handling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecoderState {
    /// Normal input mode
    Normal,

    /// Saw ESC
    Escape,

    /// Inside `ESC [ ...` (parameters until the final byte)
    Csi,

    /// Saw `ESC O`
    Ss3,
}

/// Logical key event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// No event (accumulating a sequence or ignored input)
    None,

    /// Printable character
    Char(char),

    /// Backspace (ASCII BS or DEL)
    Backspace,

    /// Enter (CR, LF or CR LF)
    Enter,

    /// Tab
    Tab,

    /// Up arrow (recall older)
    UpArrow,

    /// Down arrow (recall newer)
    DownArrow,

    /// ESC pressed twice
    DoubleEsc,

    /// Ctrl-C or Ctrl-D
    Interrupt,
}

/// Raw terminal input decoder.
#[derive(Debug)]
pub struct InputDecoder {
    state: DecoderState,
    after_cr: bool,
}

impl InputDecoder {
    /// Create new decoder in Normal state.
    pub fn new() -> Self {
        Self {
            state: DecoderState::Normal,
            after_cr: false,
        }
    }

    /// Decode a single character.
    ///
    /// ```rust,ignore
    /// // Up arrow (ESC [ A)
    /// decoder.decode_char('\x1b');
    /// decoder.decode_char('[');
    /// assert_eq!(decoder.decode_char('A'), InputEvent::UpArrow);
    /// ```
    pub fn decode_char(&mut self, c: char) -> InputEvent {
        let after_cr = core::mem::replace(&mut self.after_cr, false);

        match self.state {
            DecoderState::Normal => self.decode_normal(c, after_cr),
            DecoderState::Escape => self.decode_escape(c),
            DecoderState::Csi => self.decode_csi(c),
            DecoderState::Ss3 => self.decode_ss3(c),
        }
    }

    fn decode_normal(&mut self, c: char, after_cr: bool) -> InputEvent {
        match c {
            '\x1b' => {
                self.state = DecoderState::Escape;
                InputEvent::None
            }

            '\r' => {
                self.after_cr = true;
                InputEvent::Enter
            }

            // LF right after CR belongs to the same Enter
            '\n' if after_cr => InputEvent::None,
            '\n' => InputEvent::Enter,

            '\t' => InputEvent::Tab,

            '\x08' | '\x7f' => InputEvent::Backspace,

            '\x03' | '\x04' => InputEvent::Interrupt,

            c if c.is_control() => InputEvent::None,

            _ => InputEvent::Char(c),
        }
    }

    fn decode_escape(&mut self, c: char) -> InputEvent {
        match c {
            '\x1b' => {
                self.state = DecoderState::Normal;
                InputEvent::DoubleEsc
            }
            '[' => {
                self.state = DecoderState::Csi;
                InputEvent::None
            }
            'O' => {
                self.state = DecoderState::Ss3;
                InputEvent::None
            }
            // ESC followed by anything else (Alt+key): keep the key
            c if c.is_control() => {
                self.state = DecoderState::Normal;
                InputEvent::None
            }
            _ => {
                self.state = DecoderState::Normal;
                InputEvent::Char(c)
            }
        }
    }

    fn decode_csi(&mut self, c: char) -> InputEvent {
        // Parameter and intermediate bytes
        if matches!(c, '0'..='9' | ';' | '?' | ' ') {
            return InputEvent::None;
        }

        self.state = DecoderState::Normal;
        Self::cursor_key(c)
    }

    fn decode_ss3(&mut self, c: char) -> InputEvent {
        self.state = DecoderState::Normal;
        Self::cursor_key(c)
    }

    fn cursor_key(c: char) -> InputEvent {
        match c {
            'A' => InputEvent::UpArrow,
            'B' => InputEvent::DownArrow,
            // Left/right/home/end and the rest are not used
            _ => InputEvent::None,
        }
    }

    /// Reset decoder state to Normal.
    pub fn reset(&mut self) {
        self.state = DecoderState::Normal;
        self.after_cr = false;
    }

    /// Current decoder state.
    pub fn state(&self) -> DecoderState {
        self.state
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new()
    }
}
