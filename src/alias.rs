use crate::{
    halves::{Consumer, Producer},
    rb::RingBuffer,
};
use alloc::sync::Arc;

/// Producer handle sharing ownership of the buffer.
pub type ArcProd<T> = Producer<Arc<RingBuffer<T>>>;

/// Consumer handle sharing ownership of the buffer.
pub type ArcCons<T> = Consumer<Arc<RingBuffer<T>>>;

/// Producer handle borrowing the buffer.
pub type RefProd<'a, T> = Producer<&'a RingBuffer<T>>;

/// Consumer handle borrowing the buffer.
pub type RefCons<'a, T> = Consumer<&'a RingBuffer<T>>;
