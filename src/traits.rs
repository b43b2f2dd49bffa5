use crate::rb::RingBuffer;
use alloc::{rc::Rc, sync::Arc};

/// Reference to a ring buffer that a handle can hold.
///
/// # Safety
///
/// [`Self::rb`] must return the same buffer for the whole lifetime of the
/// implementor.
pub unsafe trait RbRef {
    /// Item type of the referenced buffer.
    type Item;

    /// Underlying ring buffer.
    fn rb(&self) -> &RingBuffer<Self::Item>;
}

unsafe impl<'a, T> RbRef for &'a RingBuffer<T> {
    type Item = T;
    #[inline]
    fn rb(&self) -> &RingBuffer<T> {
        self
    }
}
unsafe impl<T> RbRef for Rc<RingBuffer<T>> {
    type Item = T;
    #[inline]
    fn rb(&self) -> &RingBuffer<T> {
        self
    }
}
unsafe impl<T> RbRef for Arc<RingBuffer<T>> {
    type Item = T;
    #[inline]
    fn rb(&self) -> &RingBuffer<T> {
        self
    }
}
