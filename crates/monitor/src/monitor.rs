use types::wire;

use crate::buffer::CodeBuffer;
use crate::config::MonitorConfig;
use crate::console::{ByteSink, Console};
use crate::exec::Handoff;
use crate::loader::{Loader, Step};

/// The decode/store loop bound to a console and a code buffer.
///
/// The buffer is borrowed rather than owned so the firmware can keep it in a
/// `static` whose address is fixed at link time.
pub struct Monitor<'a, C> {
    console: C,
    loader: Loader,
    buffer: &'a mut CodeBuffer,
    config: MonitorConfig,
}

impl<'a, C: ByteSink> Monitor<'a, C> {
    pub fn new(console: C, buffer: &'a mut CodeBuffer, config: MonitorConfig) -> Self {
        Self {
            console,
            loader: Loader::new(),
            buffer,
            config,
        }
    }

    /// Feed one received byte: decode/store it and, when echoing, write it
    /// back. End of transmission is not echoed; CR LF is written instead.
    pub fn accept(&mut self, byte: u8) -> Step {
        let step = self.loader.feed(byte, self.buffer);

        if self.config.echo {
            match step {
                Step::Execute => self.console.write_all(&wire::NEWLINE),
                _ => self.console.write_byte(byte),
            }
        }

        #[cfg(feature = "tracing")]
        {
            match step {
                Step::Stored(value) => {
                    tracing::trace!(value, cursor = self.buffer.len(), "stored byte")
                }
                Step::Dropped(value) => tracing::trace!(value, "buffer full, byte dropped"),
                Step::Execute => tracing::debug!(
                    loaded = self.buffer.len(),
                    pending = ?self.loader.pending_nibble(),
                    "end of transmission"
                ),
                _ => {}
            }
        }

        step
    }

    pub fn buffer(&self) -> &CodeBuffer {
        &*self.buffer
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub fn config(&self) -> MonitorConfig {
        self.config
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }
}

impl<'a, C: Console> Monitor<'a, C> {
    /// Read until end of transmission and return what was loaded.
    ///
    /// Blocks forever if `0x04` never arrives outside a comment.
    pub fn load(&mut self) -> &[u8] {
        loop {
            let byte = self.console.read_byte();
            if self.accept(byte).is_execute() {
                return self.buffer.as_slice();
            }
        }
    }

    /// Load, then transfer control to the start of the code buffer.
    ///
    /// # Safety
    /// Whatever bytes arrive become the running program. The caller must own
    /// the machine and must not expect anything to survive the handoff.
    pub unsafe fn run<H: Handoff>(mut self, handoff: H) -> ! {
        self.load();
        let entry = self.buffer.entry();
        unsafe { handoff.enter(entry) }
    }
}
