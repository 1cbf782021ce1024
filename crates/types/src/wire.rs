//! Bytes with a fixed meaning on the input wire.

/// End of transmission: loading is complete, jump into the buffer.
pub const EOT: u8 = 0x04;
pub const LF: u8 = b'\n';
pub const CR: u8 = b'\r';

/// Both introducers start a comment that runs through the next CR or LF.
pub const COMMENT_INTRODUCERS: [u8; 2] = [b';', b'#'];

/// Emitted by the echoing variant right before handoff.
pub const NEWLINE: [u8; 2] = [CR, LF];

pub const fn is_comment_introducer(byte: u8) -> bool {
    byte == COMMENT_INTRODUCERS[0] || byte == COMMENT_INTRODUCERS[1]
}

pub const fn is_line_end(byte: u8) -> bool {
    byte == LF || byte == CR
}
