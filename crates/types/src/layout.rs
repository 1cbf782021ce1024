//! Memory map of the QEMU `virt` machine as seen by the monitor.

/// NS16550A UART base on `virt`.
pub const UART_BASE: usize = 0x1000_0000;
/// Receive/transmit holding register.
pub const UART_DATA_OFFSET: usize = 0;
/// Line status register.
pub const UART_LSR_OFFSET: usize = 5;
/// LSR bit 0: a received byte is waiting in RBR.
pub const UART_LSR_DATA_READY: u8 = 0x01;
/// LSR bit 5: THR can accept another byte.
pub const UART_LSR_THR_EMPTY: u8 = 0x20;

/// Capacity of the code buffer. Fixed at link time, never resized.
pub const CODE_BUFFER_CAPACITY: usize = 0x1000;
/// Bytes reserved for the monitor stack above `.bss`. `hex0`'s build script
/// rejects a `link.ld` that reserves a different amount.
pub const STACK_BYTES: usize = 0x1000;
/// Where QEMU `-bios none -kernel` places the image. Must match the `RAM`
/// origin in `hex0/link.ld`.
pub const LOAD_ADDRESS: usize = 0x8000_0000;
