use base::prelude::v1::*;

use crate::ControlBlock;

// Dropping a `Box<dyn ControlBlock>` runs the destructor of whatever variant it holds.
impl<B: ControlBlock + ?Sized> ControlBlock for Box<B> {
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
