use std::env;
use std::fs;
use std::path::Path;

#[path = "link_layout.rs"]
mod link_layout;

fn main() {
    println!("cargo:rerun-if-changed=link.ld");
    println!("cargo:rerun-if-changed=link_layout.rs");

    let dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let script = fs::read_to_string(Path::new(&dir).join("link.ld")).expect("read link.ld");

    let (origin, stack) = link_layout::script_layout(&script);
    assert_eq!(
        origin,
        Some(types::LOAD_ADDRESS),
        "link.ld RAM origin does not match types::LOAD_ADDRESS"
    );
    assert_eq!(
        stack,
        Some(types::STACK_BYTES),
        "link.ld stack reservation does not match types::STACK_BYTES"
    );

    // Host builds of the workspace compile the library only; the linker
    // script is for the monitor images.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("none") {
        println!("cargo:rustc-link-arg-bins=-T{dir}/link.ld");
    }
}
