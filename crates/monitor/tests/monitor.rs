mod common;

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use common::Script;
use monitor::{CodeBuffer, Global, Handoff, Monitor, MonitorConfig, Step};
use types::Variant;

#[test]
fn test_hello_example() {
    let mut buffer = CodeBuffer::new();
    let mut monitor = Monitor::new(
        Script::new(b"48 656c6c6f\x04"),
        &mut buffer,
        MonitorConfig::silent(),
    );

    assert_eq!(monitor.load(), &[0x48, 0x65, 0x6c, 0x6c, 0x6f]);
}

#[test]
fn test_comment_example() {
    let mut buffer = CodeBuffer::new();
    let mut monitor = Monitor::new(
        Script::new(b"; comment\n12\x04"),
        &mut buffer,
        MonitorConfig::silent(),
    );

    assert_eq!(monitor.load(), &[0x12]);
}

#[test]
fn test_load_stops_at_end_of_transmission() {
    let mut buffer = CodeBuffer::new();
    let mut monitor = Monitor::new(Script::new(b"01\x0402"), &mut buffer, MonitorConfig::silent());

    assert_eq!(monitor.load(), &[0x01]);
    assert_eq!(monitor.console().consumed(), 3);
}

#[test]
fn test_silent_variant_echoes_nothing() {
    let mut buffer = CodeBuffer::new();
    let config = MonitorConfig::for_variant(Variant::Silent);
    let mut monitor = Monitor::new(Script::new(b"# hi\nc3\x04"), &mut buffer, config);

    monitor.load();
    assert!(monitor.console().echoed.is_empty());
}

#[test]
fn test_echoing_variant_echoes_session_then_newline() {
    let mut buffer = CodeBuffer::new();
    let config = MonitorConfig::from(Variant::Echoing);
    let mut monitor = Monitor::new(Script::new(b"; x\x04y\r\n6f 7\x04"), &mut buffer, config);

    assert_eq!(monitor.load(), &[0x6f]);
    assert_eq!(monitor.console().echoed, b"; x\x04y\r\n6f 7\r\n".to_vec());
}

#[test]
fn test_accept_reports_steps() {
    let mut buffer = CodeBuffer::new();
    let mut monitor = Monitor::new(Script::new(b""), &mut buffer, MonitorConfig::echoing());

    assert_eq!(monitor.accept(b'f'), Step::HighNibble(0xf));
    assert_eq!(monitor.accept(b'0'), Step::Stored(0xf0));
    assert_eq!(monitor.loader().pending_nibble(), None);
    assert_eq!(monitor.accept(0x04), Step::Execute);
    assert_eq!(monitor.console().echoed, b"f0\r\n".to_vec());
    assert_eq!(monitor.buffer().as_slice(), &[0xf0]);
}

struct RecordEntry<'a>(&'a Cell<usize>);

impl Handoff for RecordEntry<'_> {
    unsafe fn enter(self, entry: *const u8) -> ! {
        self.0.set(entry as usize);
        panic!("handoff");
    }
}

#[test]
fn test_run_hands_off_to_buffer_start() {
    let entered = Cell::new(0usize);
    let mut buffer = CodeBuffer::new();
    let expected = buffer.entry() as usize;

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let monitor = Monitor::new(Script::new(b"1300\x04"), &mut buffer, MonitorConfig::silent());
        unsafe { monitor.run(RecordEntry(&entered)) }
    }));

    assert!(result.is_err());
    assert_eq!(entered.get(), expected);
    assert_eq!(buffer.as_slice(), &[0x13, 0x00]);
}

static STATIC_BUFFER: Global<CodeBuffer> = Global::new(CodeBuffer::new());

#[test]
fn test_static_buffer_through_global() {
    let buffer = unsafe { STATIC_BUFFER.get_mut() };
    let mut monitor = Monitor::new(Script::new(b"dead beef\x04"), buffer, MonitorConfig::silent());

    assert_eq!(monitor.load(), &[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(STATIC_BUFFER.as_ptr() as usize % 16, 0);
}
