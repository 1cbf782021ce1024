use serde::Serialize;
use tracing::{debug, info};

use monitor::{ByteSink, CodeBuffer, Monitor, MonitorConfig, Step};
use types::{wire, Variant};

/// Echo output captured instead of going to a UART.
#[derive(Debug, Default)]
pub struct Transcript(Vec<u8>);

impl Transcript {
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl ByteSink for Transcript {
    fn write_byte(&mut self, byte: u8) {
        self.0.push(byte);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub variant: Variant,
    /// Append `0x04` after the input, as `send` does.
    pub append_eot: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Silent,
            append_eot: true,
        }
    }
}

/// Everything the monitor would have done with one input stream.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    pub variant: Variant,
    pub input_len: usize,
    pub appended_eot: bool,
    /// Offset of the end of transmission that triggered handoff.
    pub handoff_offset: Option<usize>,
    /// Bytes read by the monitor, handoff byte included.
    pub consumed: usize,
    pub loaded: usize,
    /// Completed pairs that arrived with the buffer already full.
    pub dropped: usize,
    pub digits: usize,
    pub comments: usize,
    pub ignored: usize,
    /// High nibble left unflushed at the end of the stream.
    pub pending_nibble: Option<u8>,
    /// The stream ended while skipping a comment.
    pub in_comment: bool,
    #[serde(with = "hex")]
    pub image: Vec<u8>,
    #[serde(skip)]
    pub echo: Vec<u8>,
}

impl Report {
    pub fn handed_off(&self) -> bool {
        self.handoff_offset.is_some()
    }
}

/// Run `input` through the decode/store loop.
pub fn decode(input: &[u8], options: DecodeOptions) -> Report {
    let mut buffer = CodeBuffer::new();
    let config = MonitorConfig::for_variant(options.variant);
    let mut monitor = Monitor::new(Transcript::default(), &mut buffer, config);

    let eot = options.append_eot.then_some(wire::EOT);
    let stream = input.iter().copied().chain(eot);

    let mut handoff_offset = None;
    let mut consumed = 0;
    let (mut digits, mut comments, mut ignored, mut dropped) = (0, 0, 0, 0);

    for (offset, byte) in stream.enumerate() {
        consumed += 1;
        match monitor.accept(byte) {
            Step::HighNibble(_) | Step::Stored(_) => digits += 1,
            Step::Dropped(_) => {
                digits += 1;
                dropped += 1;
            }
            Step::CommentStart => comments += 1,
            Step::Ignored => ignored += 1,
            Step::InComment | Step::CommentEnd => {}
            Step::Execute => {
                handoff_offset = Some(offset);
                break;
            }
        }
    }

    if handoff_offset.is_none() {
        debug!(consumed, "stream ended without handoff");
    }

    let loader = *monitor.loader();
    let echo = std::mem::take(monitor.console_mut()).into_inner();
    let image = monitor.buffer().as_slice().to_vec();

    info!(
        variant = options.variant.name(),
        loaded = image.len(),
        dropped,
        "decoded {} input bytes",
        input.len()
    );

    Report {
        variant: options.variant,
        input_len: input.len(),
        appended_eot: options.append_eot,
        handoff_offset,
        consumed,
        loaded: image.len(),
        dropped,
        digits,
        comments,
        ignored,
        pending_nibble: loader.pending_nibble(),
        in_comment: loader.in_comment(),
        image,
        echo,
    }
}
