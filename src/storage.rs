use alloc::{boxed::Box, vec::Vec};
use core::{cell::UnsafeCell, mem::MaybeUninit};

/// Heap-allocated slot storage with interior mutability.
///
/// Slots are uninitialized by default; tracking which of them hold items is
/// the owner's job.
pub(crate) struct Storage<T> {
    len: usize,
    slots: UnsafeCell<Box<[MaybeUninit<T>]>>,
}

unsafe impl<T> Sync for Storage<T> {}

impl<T> Storage<T> {
    pub fn new(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        // `MaybeUninit` contents don't need initialization.
        unsafe { slots.set_len(len) };
        Self {
            len,
            slots: UnsafeCell::new(slots.into_boxed_slice()),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Pointer to the slot at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len`. The slot must not be accessed
    /// concurrently from both ends of the buffer.
    pub unsafe fn slot(&self, index: usize) -> *mut MaybeUninit<T> {
        (&mut *self.slots.get()).as_mut_ptr().add(index)
    }
}
