use base::cell::Cell;
use base::fmt;

use log::{debug, trace, warn};

use crate::ControlBlock;

/// A non-thread-safe control block.
///
/// The count is a plain [`Cell`], so this type is `!Sync`: it can be shared between owners on
/// one thread, but never across threads.
///
/// ```
/// use control_block::{ControlBlock, DefaultControlBlock};
///
/// let block = DefaultControlBlock::new();
/// assert_eq!(block.count(), 1);
///
/// block.increment();
/// assert_eq!(block.count(), 2);
///
/// block.decrement();
/// block.decrement();
/// assert_eq!(block.count(), 0);
/// ```
pub struct DefaultControlBlock {
    count: Cell<i32>,
}

impl DefaultControlBlock {
    /// Create a control block for a single owner.
    #[inline]
    pub const fn new() -> Self {
        DefaultControlBlock { count: Cell::new(1) }
    }

    #[cfg(test)]
    pub(crate) fn with_count(count: i32) -> Self {
        DefaultControlBlock { count: Cell::new(count) }
    }
}

impl Default for DefaultControlBlock {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ControlBlock for DefaultControlBlock {
    /// Wraps around on overflow.
    #[inline]
    fn increment(&self) {
        let old = self.count.get();
        let new = old.wrapping_add(1);
        self.count.set(new);
        trace!("control block {:p}: increment {} -> {}", self, old, new);
    }

    /// Wraps around on underflow.
    #[inline]
    fn decrement(&self) {
        let old = self.count.get();
        let new = old.wrapping_sub(1);
        self.count.set(new);
        trace!("control block {:p}: decrement {} -> {}", self, old, new);

        if new == 0 {
            debug!("control block {:p}: no owners left", self);
        } else if new < 0 {
            warn!("control block {:p}: count dropped below zero ({})", self, new);
        }
    }

    #[inline]
    fn count(&self) -> i32 {
        self.count.get()
    }
}

impl fmt::Debug for DefaultControlBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultControlBlock")
            .field("count", &self.count.get())
            .finish()
    }
}
