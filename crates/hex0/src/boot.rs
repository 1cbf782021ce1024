use monitor::exec::JumpToBuffer;
use monitor::{CodeBuffer, Global, Monitor, MonitorConfig, Ns16550};
use types::{UART_BASE, Variant};

/// The code buffer. All-zero at compile time, so it is placed in `.bss`
/// with a fixed address; it is never moved or resized.
pub static CODE_BUFFER: Global<CodeBuffer> = Global::new(CodeBuffer::new());

/// Run the monitor for `variant` until end of transmission, then jump into
/// the code buffer. Called exactly once, from the reset trampoline.
pub fn boot(variant: Variant) -> ! {
    let uart = unsafe { Ns16550::new(UART_BASE) };
    // Only borrow of the buffer; the trampoline calls us once.
    let buffer = unsafe { CODE_BUFFER.get_mut() };
    let monitor = Monitor::new(uart, buffer, MonitorConfig::for_variant(variant));
    unsafe { monitor.run(JumpToBuffer) }
}
