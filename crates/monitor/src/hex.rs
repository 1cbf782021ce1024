use types::wire;

/// Classification of one input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digit {
    /// A hex digit, value `0..=15`.
    Nibble(u8),
    /// Anything that carries no data: whitespace, punctuation, letters past `F`.
    NotDigit,
    /// `;` or `#`. Everything through the next CR/LF must be skipped.
    Comment,
}

impl Digit {
    pub const fn nibble(self) -> Option<u8> {
        match self {
            Digit::Nibble(value) => Some(value),
            _ => None,
        }
    }
}

/// Classify `c`. Rules are checked in order; the first match wins.
///
/// Letters are folded to upper case by clearing bit 5 *after* the decimal
/// digits have been handled. Every byte above `'9'` whose folded value lands
/// below `'A'` or above `'F'` is not a digit, which also covers the
/// `':'..='@'` punctuation run and any byte with bit 7 set.
pub const fn decode(c: u8) -> Digit {
    if wire::is_comment_introducer(c) {
        return Digit::Comment;
    }

    if c < b'0' {
        return Digit::NotDigit;
    }

    if c <= b'9' {
        return Digit::Nibble(c - b'0');
    }

    let folded = c & !0x20;

    if folded < b'A' {
        return Digit::NotDigit;
    }

    if folded <= b'F' {
        return Digit::Nibble(folded - b'A' + 10);
    }

    Digit::NotDigit
}
