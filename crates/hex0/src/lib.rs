#![no_std]
//! Bare-metal hex0 monitor images for the QEMU `virt` machine.
//!
//! This crate provides:
//! - the statically reserved code buffer,
//! - `boot()`, which wires the NS16550 console and the RISC-V handoff into
//!   the decode/store loop,
//! - a panic handler that parks the hart without touching the UART.
//!
//! The reset trampolines live in the two binaries, `hex0-silent` and
//! `hex0-echo`, because each variant owns its own `_start`.

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub mod boot;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub use boot::{CODE_BUFFER, boot};

#[cfg(all(target_os = "none", any(target_arch = "riscv32", target_arch = "riscv64")))]
mod panic;
