#![no_std]
//! Decode/store core of the hex0 monitor.
//!
//! The monitor reads ASCII hex pairs from a polled serial port, packs them
//! into a fixed 4 KiB code buffer, and on `0x04` jumps into that buffer.
//! Everything here is target independent except the NS16550 accessors and
//! the RISC-V `exec::JumpToBuffer` handoff, which keeps the state machine
//! testable on the host.

pub mod buffer;
pub use buffer::CodeBuffer;

pub mod config;
pub use config::MonitorConfig;

pub mod console;
pub use console::{ByteSink, ByteSource, Console};

pub mod exec;
pub use exec::Handoff;

pub mod global;
pub use global::Global;

pub mod hex;
pub use hex::Digit;

pub mod loader;
pub use loader::{Loader, Parity, Step};

pub mod monitor;
pub use monitor::Monitor;

pub mod uart;
pub use uart::Ns16550;
