use types::CODE_BUFFER_CAPACITY;

/// Fixed-capacity region the monitor writes decoded bytes into and later
/// jumps to.
///
/// `bytes` is the first field of a `repr(C)` struct so the buffer start is
/// also the entry address. The backing array is never resized or
/// reallocated; once `len` reaches capacity further bytes are dropped.
#[repr(C, align(16))]
pub struct CodeBuffer {
    bytes: [u8; CODE_BUFFER_CAPACITY],
    len: usize,
}

impl CodeBuffer {
    /// All-zero buffer. `const` so a `static` of it lands in `.bss`.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; CODE_BUFFER_CAPACITY],
            len: 0,
        }
    }

    /// Append at the write cursor. Returns `false` and leaves the buffer
    /// untouched when it is already full.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.len >= CODE_BUFFER_CAPACITY {
            return false;
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        true
    }

    /// Write cursor: number of bytes stored so far.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len >= CODE_BUFFER_CAPACITY
    }

    pub const fn capacity(&self) -> usize {
        CODE_BUFFER_CAPACITY
    }

    pub const fn remaining(&self) -> usize {
        CODE_BUFFER_CAPACITY - self.len
    }

    /// The filled prefix.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// First byte of the buffer, where the handoff lands.
    pub const fn entry(&self) -> *const u8 {
        self.bytes.as_ptr()
    }
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self::new()
    }
}
