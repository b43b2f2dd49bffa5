use crate::traits::RbRef;
use core::{hint, num::NonZeroUsize};

/// Consumer handle of ring buffer.
///
/// The only writer of the buffer's read cursor. Dropping the handle releases
/// the read end.
pub struct Consumer<R: RbRef> {
    rb: R,
}

impl<R: RbRef> Consumer<R> {
    /// Claims the read end, spinning until it is free.
    ///
    /// There is no fairness among contenders and no backoff; callers that
    /// need either should use [`Self::try_claim`] in their own loop.
    pub fn claim(rb: R) -> Self {
        while !rb.rb().hold_read() {
            hint::spin_loop();
        }
        Self { rb }
    }

    /// Attempts to claim the read end without spinning.
    ///
    /// Returns the reference back if the end is already held.
    pub fn try_claim(rb: R) -> Result<Self, R> {
        if rb.rb().hold_read() {
            Ok(Self { rb })
        } else {
            Err(rb)
        }
    }

    /// Capacity of the buffer.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.rb.rb().capacity()
    }

    /// The number of items stored in the buffer.
    ///
    /// *Actual number may be less than the returned value because of the
    /// producer's concurring activity.*
    #[inline]
    pub fn occupied_len(&self) -> usize {
        self.rb.rb().occupied_len()
    }

    /// The number of remaining vacant places in the buffer.
    #[inline]
    pub fn vacant_len(&self) -> usize {
        self.rb.rb().vacant_len()
    }

    /// Checks if the buffer is empty.
    ///
    /// *The result may become irrelevant at any time because of concurring
    /// producer activity.*
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rb.rb().is_empty()
    }

    /// Checks if the buffer is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.rb.rb().is_full()
    }

    /// Returns a reference to the oldest stored item without removing it.
    ///
    /// Returns `None` if the buffer is empty. The reference is valid until
    /// the next [`Self::try_pop`].
    pub fn try_peek(&self) -> Option<&R::Item> {
        let rb = self.rb.rb();
        if rb.is_empty() {
            None
        } else {
            Some(unsafe { (*rb.slot(rb.read_index())).assume_init_ref() })
        }
    }

    /// Removes the oldest item from the buffer and returns it.
    ///
    /// Returns `None` if the buffer is empty.
    pub fn try_pop(&mut self) -> Option<R::Item> {
        let rb = self.rb.rb();
        if rb.is_empty() {
            return None;
        }
        let read = rb.read_index();
        let elem = unsafe { (*rb.slot(read)).assume_init_read() };
        // The move out above must complete before the slot is republished as
        // vacant to the producer.
        unsafe { rb.set_read_index((read + 1) % rb.modulus()) };
        Some(elem)
    }
}

impl<R: RbRef> Drop for Consumer<R> {
    fn drop(&mut self) {
        unsafe { self.rb.rb().release_read() };
    }
}
