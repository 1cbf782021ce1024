//! The one-way jump from monitor to loaded code.

/// Transfer control to raw bytes that are already in memory.
///
/// This is the single point where data becomes code, so it is pluggable:
/// each architecture supplies its own implementation and tests can supply
/// one that records the entry address instead of jumping.
pub trait Handoff {
    /// # Safety
    /// `entry` must point at the bytes to execute. Nothing the caller holds
    /// survives; the callee gets no arguments and never returns.
    unsafe fn enter(self, entry: *const u8) -> !;
}

/// RISC-V handoff: `fence.i` so instruction fetch observes the bytes just
/// stored through the data path, then `jr` into the buffer.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpToBuffer;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
impl Handoff for JumpToBuffer {
    unsafe fn enter(self, entry: *const u8) -> ! {
        unsafe {
            core::arch::asm!(
                "fence.i",
                "jr {entry}",
                entry = in(reg) entry,
                options(noreturn)
            );
        }
    }
}
