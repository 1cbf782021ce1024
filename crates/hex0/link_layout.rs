//! Reads the layout values out of `link.ld` so they can be held against
//! `types::layout`. Shared by `build.rs` and `tests/link_layout.rs`.

/// Precedes the RAM origin in the `MEMORY` block.
pub const ORIGIN_MARKER: &str = "ORIGIN = 0x";
/// Precedes the stack reservation in the `.stack` section.
pub const STACK_MARKER: &str = ". += 0x";

/// Parses the hex literal that follows the first `marker` in `script`.
pub fn hex_after(script: &str, marker: &str) -> Option<usize> {
    let start = script.find(marker)? + marker.len();
    let digits = &script[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(digits.len());
    usize::from_str_radix(&digits[..end], 16).ok()
}

/// `(origin, stack bytes)` as written in the script.
pub fn script_layout(script: &str) -> (Option<usize>, Option<usize>) {
    (
        hex_after(script, ORIGIN_MARKER),
        hex_after(script, STACK_MARKER),
    )
}
