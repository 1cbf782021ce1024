/// Bytes per dump line.
pub const LINE_BYTES: usize = 16;

/// Hex dump of `bytes` that is itself valid monitor input: pairs separated
/// by spaces, with the offset in a trailing `;` comment.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in bytes.chunks(LINE_BYTES).enumerate() {
        let digits = hex::encode(chunk);
        let pairs: Vec<&str> = digits
            .as_bytes()
            .chunks(2)
            .map(|pair| std::str::from_utf8(pair).unwrap_or("??"))
            .collect();
        out.push_str(&format!(
            "{:<width$} ; {:04x}\n",
            pairs.join(" "),
            line * LINE_BYTES,
            width = LINE_BYTES * 3 - 1
        ));
    }
    out
}
