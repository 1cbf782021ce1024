//! Polled NS16550 driver: one status register, one data register.

use core::hint::spin_loop;
use core::ptr;

use types::{UART_DATA_OFFSET, UART_LSR_DATA_READY, UART_LSR_OFFSET, UART_LSR_THR_EMPTY};

use crate::console::{ByteSink, ByteSource};

/// Memory-mapped NS16550-compatible UART.
///
/// Only LSR bit 0 (data ready) and bit 5 (THR empty) are consulted; the
/// device is assumed to be configured by firmware or the emulator already.
#[derive(Debug)]
pub struct Ns16550 {
    base: *mut u8,
}

impl Ns16550 {
    /// # Safety
    /// `base` must be the address of an NS16550 register block that nothing
    /// else accesses for the lifetime of this value.
    pub unsafe fn new(base: usize) -> Self {
        unsafe { Self::from_ptr(base as *mut u8) }
    }

    /// # Safety
    /// Same contract as [`Ns16550::new`]; at least six bytes at `base` must
    /// be valid for volatile reads and writes.
    pub unsafe fn from_ptr(base: *mut u8) -> Self {
        Self { base }
    }

    fn line_status(&self) -> u8 {
        unsafe { ptr::read_volatile(self.base.add(UART_LSR_OFFSET)) }
    }

    pub fn rx_ready(&self) -> bool {
        self.line_status() & UART_LSR_DATA_READY != 0
    }

    pub fn tx_ready(&self) -> bool {
        self.line_status() & UART_LSR_THR_EMPTY != 0
    }
}

impl ByteSource for Ns16550 {
    fn read_byte(&mut self) -> u8 {
        while !self.rx_ready() {
            spin_loop();
        }
        unsafe { ptr::read_volatile(self.base.add(UART_DATA_OFFSET)) }
    }
}

impl ByteSink for Ns16550 {
    fn write_byte(&mut self, byte: u8) {
        while !self.tx_ready() {
            spin_loop();
        }
        unsafe { ptr::write_volatile(self.base.add(UART_DATA_OFFSET), byte) }
    }
}
