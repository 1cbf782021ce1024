#[path = "../link_layout.rs"]
mod link_layout;

use link_layout::{ORIGIN_MARKER, STACK_MARKER, hex_after, script_layout};

const LINK_LD: &str = include_str!("../link.ld");

#[test]
fn test_link_script_origin_is_load_address() {
    assert_eq!(hex_after(LINK_LD, ORIGIN_MARKER), Some(types::LOAD_ADDRESS));
}

#[test]
fn test_link_script_reserves_stack_bytes() {
    assert_eq!(hex_after(LINK_LD, STACK_MARKER), Some(types::STACK_BYTES));
}

#[test]
fn test_script_layout_reads_edited_values() {
    let script = "RAM (rwx) : ORIGIN = 0x80200000, LENGTH = 4M\n. += 0x2000;\n";
    assert_eq!(script_layout(script), (Some(0x8020_0000), Some(0x2000)));
}

#[test]
fn test_script_layout_without_markers() {
    assert_eq!(script_layout("SECTIONS {}"), (None, None));
}
