#![allow(dead_code)]

use monitor::{ByteSink, ByteSource, CodeBuffer, Loader, Step};

/// Console that replays a fixed input and records everything written back.
pub struct Script {
    input: Vec<u8>,
    pos: usize,
    pub echoed: Vec<u8>,
}

impl Script {
    pub fn new(input: impl AsRef<[u8]>) -> Self {
        Self {
            input: input.as_ref().to_vec(),
            pos: 0,
            echoed: Vec::new(),
        }
    }

    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl ByteSource for Script {
    fn read_byte(&mut self) -> u8 {
        let byte = *self
            .input
            .get(self.pos)
            .expect("script exhausted before end of transmission");
        self.pos += 1;
        byte
    }
}

impl ByteSink for Script {
    fn write_byte(&mut self, byte: u8) {
        self.echoed.push(byte);
    }
}

/// Feed every byte of `input` and collect the steps.
pub fn feed_all(loader: &mut Loader, buffer: &mut CodeBuffer, input: &[u8]) -> Vec<Step> {
    input.iter().map(|&byte| loader.feed(byte, buffer)).collect()
}

/// Hex-encode `bytes` the way an operator would type them.
pub fn encode(bytes: &[u8], upper: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() * 3);
    for byte in bytes {
        let pair = if upper {
            format!("{byte:02X}")
        } else {
            format!("{byte:02x}")
        };
        out.extend_from_slice(pair.as_bytes());
        out.push(b' ');
    }
    out
}
