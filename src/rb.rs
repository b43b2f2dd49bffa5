use crate::{
    halves::{Consumer, Producer},
    storage::Storage,
};
use alloc::sync::Arc;
use core::{
    mem::MaybeUninit,
    num::NonZeroUsize,
    ptr,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};
use crossbeam_utils::CachePadded;

/// Fixed-capacity SPSC ring buffer.
///
/// Holds `capacity + 1` slots and keeps one of them permanently vacant, so
/// `read == write` always means empty, never full. Cursors are exchanged with
/// acquire/release ordering; each cursor has exactly one writer (the producer
/// writes `write`, the consumer writes `read`), which is what makes the data
/// path lock-free without compare-and-swap.
///
/// All mutation goes through the [`Producer`] and [`Consumer`] handles. Each
/// end is guarded by a claim flag so at most one handle per end exists at any
/// instant; see [`Producer::claim`] and [`Consumer::claim`], or [`Self::split`]
/// to take both ends at once.
///
/// Note that there is no explicit requirement of `T: Send`. The ring buffer
/// will work just fine even with `T: !Send` until you try to send its producer
/// or consumer to another thread.
pub struct RingBuffer<T> {
    storage: Storage<T>,
    read: CachePadded<AtomicUsize>,
    write: CachePadded<AtomicUsize>,
    read_held: AtomicBool,
    write_held: AtomicBool,
}

impl<T> RingBuffer<T> {
    /// Creates a buffer able to hold `capacity` items.
    ///
    /// Allocates `capacity + 1` slots.
    ///
    /// *Panics if `capacity` is zero.*
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");
        Self {
            storage: Storage::new(capacity + 1),
            read: CachePadded::new(AtomicUsize::new(0)),
            write: CachePadded::new(AtomicUsize::new(0)),
            read_held: AtomicBool::new(false),
            write_held: AtomicBool::new(false),
        }
    }

    /// Capacity of the buffer.
    ///
    /// It is constant during the whole ring buffer lifetime.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        unsafe { NonZeroUsize::new_unchecked(self.storage.len() - 1) }
    }

    /// Modulus for the cursors, equals `capacity + 1` (the slot count).
    #[inline]
    pub(crate) fn modulus(&self) -> NonZeroUsize {
        unsafe { NonZeroUsize::new_unchecked(self.storage.len()) }
    }

    /// Index of the oldest stored item.
    ///
    /// Index value is in range `0..=capacity`.
    #[inline]
    pub fn read_index(&self) -> usize {
        self.read.load(Ordering::Acquire)
    }
    /// Index of the next vacant slot.
    ///
    /// Index value is in range `0..=capacity`.
    #[inline]
    pub fn write_index(&self) -> usize {
        self.write.load(Ordering::Acquire)
    }

    /// # Safety
    ///
    /// Must be called only by the consumer. The index must go forward by slots
    /// that have been moved out, wrapping at the modulus.
    #[inline]
    pub(crate) unsafe fn set_read_index(&self, value: usize) {
        self.read.store(value, Ordering::Release);
    }
    /// # Safety
    ///
    /// Must be called only by the producer. The index must go forward by slots
    /// that have been initialized, wrapping at the modulus.
    #[inline]
    pub(crate) unsafe fn set_write_index(&self, value: usize) {
        self.write.store(value, Ordering::Release);
    }

    /// # Safety
    ///
    /// `index` must be less than the modulus. The producer may access only
    /// vacant slots, the consumer only occupied ones.
    #[inline]
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut MaybeUninit<T> {
        self.storage.slot(index)
    }

    /// The number of items stored in the buffer.
    ///
    /// *Actual number may be greater or less than returned value due to
    /// concurring activity of producer or consumer respectively.*
    pub fn occupied_len(&self) -> usize {
        let modulus = self.modulus();
        (modulus.get() + self.write_index() - self.read_index()) % modulus
    }

    /// The number of remaining vacant places in the buffer.
    ///
    /// *Actual number may be greater or less than returned value due to
    /// concurring activity of consumer or producer respectively.*
    pub fn vacant_len(&self) -> usize {
        self.capacity().get() - self.occupied_len()
    }

    /// Checks if the buffer is empty.
    ///
    /// *The result may become irrelevant at any time because of concurring
    /// producer activity.*
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read_index() == self.write_index()
    }

    /// Checks if the buffer is full.
    ///
    /// *The result may become irrelevant at any time because of concurring
    /// consumer activity.*
    #[inline]
    pub fn is_full(&self) -> bool {
        self.vacant_len() == 0
    }

    /// Whether the read end is currently claimed by a consumer.
    #[inline]
    pub fn read_is_held(&self) -> bool {
        self.read_held.load(Ordering::Relaxed)
    }
    /// Whether the write end is currently claimed by a producer.
    #[inline]
    pub fn write_is_held(&self) -> bool {
        self.write_held.load(Ordering::Relaxed)
    }

    /// Attempts to claim the read end. Returns whether the claim was won.
    #[inline]
    pub(crate) fn hold_read(&self) -> bool {
        !self.read_held.swap(true, Ordering::Acquire)
    }
    /// Attempts to claim the write end. Returns whether the claim was won.
    #[inline]
    pub(crate) fn hold_write(&self) -> bool {
        !self.write_held.swap(true, Ordering::Acquire)
    }

    /// # Safety
    ///
    /// Must be called exactly once, by the consumer that won the claim.
    #[inline]
    pub(crate) unsafe fn release_read(&self) {
        self.read_held.store(false, Ordering::Release);
    }
    /// # Safety
    ///
    /// Must be called exactly once, by the producer that won the claim.
    #[inline]
    pub(crate) unsafe fn release_write(&self) {
        self.write_held.store(false, Ordering::Release);
    }

    /// Splits the buffer into producer and consumer handles sharing ownership.
    pub fn split(self) -> (Producer<Arc<Self>>, Consumer<Arc<Self>>) {
        let rb = Arc::new(self);
        (Producer::claim(rb.clone()), Consumer::claim(rb))
    }

    /// Splits the buffer by reference into borrowing producer and consumer
    /// handles.
    pub fn split_ref(&mut self) -> (Producer<&Self>, Consumer<&Self>) {
        let rb = &*self;
        (Producer::claim(rb), Consumer::claim(rb))
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        let modulus = self.modulus().get();
        let write = self.write_index();
        let mut read = self.read_index();
        while read != write {
            unsafe { ptr::drop_in_place((*self.slot(read)).as_mut_ptr()) };
            read = (read + 1) % modulus;
        }
    }
}
