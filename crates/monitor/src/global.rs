use core::cell::UnsafeCell;

/// Static home for the code buffer.
///
/// The firmware keeps exactly one `CodeBuffer` in a `static` so it lands in
/// `.bss` at a fixed address. `Global` makes that static `Sync`; the single
/// hart running the monitor is the only one that ever borrows it.
pub struct Global<T> {
    inner: UnsafeCell<T>,
}

impl<T> Global<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: UnsafeCell::new(value),
        }
    }

    /// Borrow the contents for the lifetime of the monitor session.
    ///
    /// # Safety
    /// At most one `&mut` may be live. `hex0::boot` takes it once and never
    /// returns.
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn get_mut(&self) -> &mut T {
        unsafe { &mut *self.inner.get() }
    }

    /// Address of the contents, without borrowing them.
    pub const fn as_ptr(&self) -> *mut T {
        self.inner.get()
    }
}

unsafe impl<T> Sync for Global<T> {}
