use crate::traits::RbRef;
use core::{hint, num::NonZeroUsize};

/// Producer handle of ring buffer.
///
/// The only writer of the buffer's write cursor. Dropping the handle releases
/// the write end.
pub struct Producer<R: RbRef> {
    rb: R,
}

impl<R: RbRef> Producer<R> {
    /// Claims the write end, spinning until it is free.
    ///
    /// There is no fairness among contenders and no backoff; callers that
    /// need either should use [`Self::try_claim`] in their own loop.
    pub fn claim(rb: R) -> Self {
        while !rb.rb().hold_write() {
            hint::spin_loop();
        }
        Self { rb }
    }

    /// Attempts to claim the write end without spinning.
    ///
    /// Returns the reference back if the end is already held.
    pub fn try_claim(rb: R) -> Result<Self, R> {
        if rb.rb().hold_write() {
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
    /// *Actual number may be greater than the returned value because of the
    /// consumer's concurring activity.*
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
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rb.rb().is_empty()
    }

    /// Checks if the buffer is full.
    ///
    /// *The result may become irrelevant at any time because of concurring
    /// consumer activity.*
    #[inline]
    pub fn is_full(&self) -> bool {
        self.rb.rb().is_full()
    }

    /// Appends an item to the buffer.
    ///
    /// If the buffer is full, returns an `Err` containing the item that
    /// hasn't been appended.
    pub fn try_push(&mut self, elem: R::Item) -> Result<(), R::Item> {
        let rb = self.rb.rb();
        if rb.is_full() {
            return Err(elem);
        }
        let write = rb.write_index();
        unsafe {
            (*rb.slot(write)).write(elem);
            // The data write above must be visible before the cursor advance.
            rb.set_write_index((write + 1) % rb.modulus());
        }
        Ok(())
    }
}

impl<R: RbRef> Drop for Producer<R> {
    fn drop(&mut self) {
        unsafe { self.rb.rb().release_write() };
    }
}
