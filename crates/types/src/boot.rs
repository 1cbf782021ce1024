//! Boot-time build variants shared between the firmware and host tooling.
//!
//! These types live in `types` so the bare-metal binaries and `hexfeed`
//! agree on what each variant does without depending on each other.

/// Which flavour of the monitor a binary was built as.
///
/// Both variants run the same decode/store loop; they differ only in what
/// they write back to the operator and in how much they trust the reset
/// state of RAM.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Echoes nothing and relies on RAM being zeroed at reset.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "silent"))]
    Silent,
    /// Echoes every received byte and zero-fills `.bss` before the loop.
    #[cfg_attr(feature = "serde", serde(rename = "echo"))]
    Echoing,
}

impl Variant {
    pub const fn echoes(self) -> bool {
        matches!(self, Variant::Echoing)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Silent => "silent",
            Variant::Echoing => "echo",
        }
    }
}
