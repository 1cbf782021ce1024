use types::Variant;

/// Runtime knobs of the decode/store loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Write every received byte back out, plus CR LF before handoff.
    pub echo: bool,
}

impl MonitorConfig {
    pub const fn silent() -> Self {
        Self { echo: false }
    }

    pub const fn echoing() -> Self {
        Self { echo: true }
    }

    pub const fn for_variant(variant: Variant) -> Self {
        Self {
            echo: variant.echoes(),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::silent()
    }
}

impl From<Variant> for MonitorConfig {
    fn from(variant: Variant) -> Self {
        Self::for_variant(variant)
    }
}
