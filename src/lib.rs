#![no_std]
extern crate maybe_std as base;

#[cfg(test)]
extern crate std;

/// Bookkeeping for how many owners share some resource.
///
/// A control block starts out with a count of one, representing the owner that created it.
/// Owners report themselves through [`increment`](ControlBlock::increment) and
/// [`decrement`](ControlBlock::decrement). Reaching zero has no effect on the block itself.
/// Releasing the shared resource (and the block) is up to whoever owns them.
///
/// All methods take `&self`, since the block is owned collectively by all of its owners
/// rather than by any single one of them.
pub trait ControlBlock {
    /// Register an additional owner.
    fn increment(&self);

    /// Unregister an owner.
    ///
    /// This does not stop at zero, the count may become negative.
    fn decrement(&self);

    /// Get the number of owners currently registered.
    fn count(&self) -> i32;
}

impl<B: ControlBlock + ?Sized> ControlBlock for &B {
    #[inline]
    fn increment(&self) {
        (**self).increment()
    }

    #[inline]
    fn decrement(&self) {
        (**self).decrement()
    }

    #[inline]
    fn count(&self) -> i32 {
        (**self).count()
    }
}

#[cfg(feature = "alloc")]
mod boxed;

mod block;
pub use block::*;
