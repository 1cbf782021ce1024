#![no_std]
#![no_main]

use core::arch::global_asm;

use types::Variant;

// Reset vector: stack first, then clear `__bss_start..__bss_end` one byte at
// a time in ascending order, then the monitor loop.
global_asm!(
    ".pushsection .text.start, \"ax\"",
    ".globl _start",
    "_start:",
    "    la sp, _stack_top",
    "    la t0, __bss_start",
    "    la t1, __bss_end",
    "1:  bgeu t0, t1, 2f",
    "    sb zero, 0(t0)",
    "    addi t0, t0, 1",
    "    j 1b",
    "2:  call monitor_main",
    "3:  j 3b",
    ".popsection",
);

#[unsafe(no_mangle)]
pub extern "C" fn monitor_main() -> ! {
    hex0::boot(Variant::Echoing)
}
