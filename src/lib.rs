//! Lock-free SPSC FIFO ring buffer with exclusive producer and consumer handles.
//!
//! The buffer stores `capacity + 1` slots and keeps one permanently vacant,
//! so equal cursors always mean "empty" and no separate counter is needed.
//! Each end of the buffer is guarded by a claim flag: at most one [`Producer`]
//! and one [`Consumer`] exist at any instant, and the handles release their
//! end when dropped.
//!
//! There is no blocking and no wakeup mechanism. [`Producer::try_push`] hands
//! the item back when the buffer is full and [`Consumer::try_pop`] returns
//! `None` when it is empty; callers poll with whatever backoff suits them.
//!
//! ```
//! use circbuf::RingBuffer;
//!
//! let rb = RingBuffer::<i32>::new(100);
//! let (mut prod, mut cons) = rb.split();
//!
//! prod.try_push(10).unwrap();
//! assert_eq!(prod.occupied_len(), 1);
//! assert!(!prod.is_full());
//!
//! assert_eq!(cons.try_peek(), Some(&10));
//! assert_eq!(cons.try_pop(), Some(10));
//! assert!(cons.is_empty());
//! ```
//!
//! Handles may be sent to other threads when the item type is `Send`:
//!
//! ```
//! use std::thread;
//! use circbuf::RingBuffer;
//!
//! let rb = RingBuffer::<i32>::new(256);
//! let (mut prod, mut cons) = rb.split();
//! thread::spawn(move || {
//!     prod.try_push(123).unwrap();
//! })
//! .join()
//! .unwrap();
//! thread::spawn(move || {
//!     assert_eq!(cons.try_pop().unwrap(), 123);
//! })
//! .join()
//! .unwrap();
//! ```
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod alias;
pub mod halves;
pub mod rb;
mod storage;
pub mod traits;

#[cfg(test)]
mod tests;

pub use alias::{ArcCons, ArcProd, RefCons, RefProd};
pub use halves::{Consumer, Producer};
pub use rb::RingBuffer;
pub use traits::RbRef;
