//! Host-side companion to the hex0 monitor.
//!
//! `decode` runs a hex source through [`monitor::Monitor`] exactly as the
//! firmware would and summarises the session; `send` streams a source to a
//! serial device.

pub mod cli;
pub mod dump;
pub mod error;
pub mod feed;
pub mod send;

pub use error::{FeedError, Result};
pub use feed::{decode, DecodeOptions, Report};
