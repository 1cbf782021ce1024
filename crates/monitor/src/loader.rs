use types::wire;

use crate::buffer::CodeBuffer;
use crate::hex::{self, Digit};

/// Which half of the next byte the next hex digit supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    ExpectHigh,
    /// Holds the high nibble seen so far.
    ExpectLow(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Tokens,
    InComment,
}

/// What feeding a single byte into the [`Loader`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A digit pair completed and the byte was appended.
    Stored(u8),
    /// A digit pair completed but the buffer was full.
    Dropped(u8),
    /// First digit of a pair, held in the accumulator.
    HighNibble(u8),
    /// Not a digit; no state change.
    Ignored,
    /// `;` or `#` seen; following bytes are skipped.
    CommentStart,
    /// Byte swallowed inside a comment. `0x04` included.
    InComment,
    /// CR or LF closing a comment.
    CommentEnd,
    /// End of transmission outside a comment. Time to hand off.
    Execute,
}

impl Step {
    pub const fn is_execute(self) -> bool {
        matches!(self, Step::Execute)
    }
}

/// Byte-fed decode/store state machine.
///
/// It never reads on its own, so the same code drives the UART loop on the
/// target and file previews on the host. The comment skipper is folded in as
/// a third mode; a comment leaves the nibble accumulator alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loader {
    parity: Parity,
    mode: Mode,
}

impl Loader {
    pub const fn new() -> Self {
        Self {
            parity: Parity::ExpectHigh,
            mode: Mode::Tokens,
        }
    }

    pub const fn parity(&self) -> Parity {
        self.parity
    }

    pub const fn in_comment(&self) -> bool {
        matches!(self.mode, Mode::InComment)
    }

    /// High nibble still waiting for its partner, if any.
    pub const fn pending_nibble(&self) -> Option<u8> {
        match self.parity {
            Parity::ExpectLow(high) => Some(high),
            Parity::ExpectHigh => None,
        }
    }

    /// Advance by one input byte, appending to `buffer` when a pair completes.
    ///
    /// After [`Step::Execute`] the caller is expected to hand off; the loader
    /// itself keeps no record of it.
    pub fn feed(&mut self, byte: u8, buffer: &mut CodeBuffer) -> Step {
        if self.in_comment() {
            if wire::is_line_end(byte) {
                self.mode = Mode::Tokens;
                return Step::CommentEnd;
            }
            return Step::InComment;
        }

        if byte == wire::EOT {
            return Step::Execute;
        }

        match hex::decode(byte) {
            Digit::Comment => {
                self.mode = Mode::InComment;
                Step::CommentStart
            }
            Digit::NotDigit => Step::Ignored,
            Digit::Nibble(low) => match self.parity {
                Parity::ExpectHigh => {
                    self.parity = Parity::ExpectLow(low);
                    Step::HighNibble(low)
                }
                Parity::ExpectLow(high) => {
                    self.parity = Parity::ExpectHigh;
                    let value = (high << 4) | low;
                    if buffer.push(value) {
                        Step::Stored(value)
                    } else {
                        Step::Dropped(value)
                    }
                }
            },
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
