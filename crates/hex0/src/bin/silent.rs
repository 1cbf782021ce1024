#![no_std]
#![no_main]

use core::arch::global_asm;

use types::Variant;

// Reset vector. The machine hands us zeroed RAM, so `.bss` is left alone
// and only the stack pointer is established.
global_asm!(
    ".pushsection .text.start, \"ax\"",
    ".globl _start",
    "_start:",
    "    la sp, _stack_top",
    "    call monitor_main",
    "1:  j 1b",
    ".popsection",
);

#[unsafe(no_mangle)]
pub extern "C" fn monitor_main() -> ! {
    hex0::boot(Variant::Silent)
}
