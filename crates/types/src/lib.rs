#![no_std]

pub mod boot;
pub use boot::Variant;

pub mod layout;
pub use layout::*;

pub mod wire;
