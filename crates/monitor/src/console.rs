//! Blocking byte I/O the monitor is written against.
//!
//! Neither direction can fail: a device that never becomes ready simply
//! blocks forever, which is acceptable when nothing else runs on the hart.

/// Blocking receive of one byte.
pub trait ByteSource {
    fn read_byte(&mut self) -> u8;
}

/// Blocking transmit of one byte.
pub trait ByteSink {
    fn write_byte(&mut self, byte: u8);

    fn write_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }
}

/// Both directions over one device.
pub trait Console: ByteSource + ByteSink {}

impl<T: ByteSource + ByteSink + ?Sized> Console for T {}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }
}

impl<T: ByteSink + ?Sized> ByteSink for &mut T {
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }
}
