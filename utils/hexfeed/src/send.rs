use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::info;
use types::wire;

use crate::error::{FeedError, Result};

/// The exact bytes put on the wire for `input`.
pub fn stream_bytes(input: &[u8], append_eot: bool) -> Vec<u8> {
    let mut stream = input.to_vec();
    if append_eot {
        stream.push(wire::EOT);
    }
    stream
}

/// Write `input` (and end of transmission) to an existing device node or
/// file. Returns the number of bytes written.
pub fn send(input: &[u8], device: &Path, append_eot: bool) -> Result<usize> {
    let stream = stream_bytes(input, append_eot);
    let mut port = OpenOptions::new()
        .write(true)
        .open(device)
        .map_err(|e| FeedError::write(device, e))?;
    port.write_all(&stream)
        .and_then(|_| port.flush())
        .map_err(|e| FeedError::write(device, e))?;

    info!(device = %device.display(), bytes = stream.len(), "sent stream");
    Ok(stream.len())
}

/// Save a loaded image as raw bytes.
pub fn write_image(path: &Path, image: &[u8]) -> Result<()> {
    std::fs::write(path, image).map_err(|e| FeedError::write(path, e))
}
