//! Exclusive handles for the two ends of the ring buffer.
//!
//! Acquiring a handle claims the corresponding end of the buffer; dropping it
//! releases the claim so the end may be claimed again, possibly by another
//! thread. The handles are not `Clone`, so exclusivity holds statically for
//! as long as a handle lives.

mod cons;
mod prod;

pub use cons::Consumer;
pub use prod::Producer;
