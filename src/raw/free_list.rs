use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::ops::Range;

use super::handle::Handle;

/// A LIFO stack of arena slots that currently hold no node.
///
/// The most recently freed slot is always handed out first.
#[derive(Debug, Default)]
pub(crate) struct FreeList {
    stack: Vec<Handle>,
}

// A clone keeps the reserved buffer so that `push` still never reallocates.
impl Clone for FreeList {
    fn clone(&self) -> Self {
        let mut stack = Vec::with_capacity(self.stack.capacity());
        stack.extend_from_slice(&self.stack);
        Self { stack }
    }
}

impl FreeList {
    pub(crate) const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns the most recently pushed slot, or `None` once exhausted.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Handle> {
        self.stack.pop()
    }

    #[inline]
    pub(crate) fn push(&mut self, handle: Handle) {
        debug_assert!(self.stack.len() < self.stack.capacity(), "`FreeList::push()` - buffer was not reserved!");
        self.stack.push(handle);
    }


    /// Reserves room so that the stack can hold `capacity` slots without
    /// reallocating.
    pub(crate) fn try_reserve_total(&mut self, capacity: usize) -> Result<(), TryReserveError> {
        self.stack.try_reserve_exact(capacity.saturating_sub(self.stack.len()))
    }

    /// Marks every slot in `range` as free. The lowest index is popped first.
    pub(crate) fn extend_range(&mut self, range: Range<usize>) {
        self.stack.extend(range.rev().map(Handle::from_index));
    }

    /// Makes every slot in `0..capacity` free again.
    pub(crate) fn reset(&mut self, capacity: usize) {
        self.stack.clear();
        self.extend_range(0..capacity);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn reserved(capacity: usize) -> FreeList {
        let mut free = FreeList::new();
        free.try_reserve_total(capacity).unwrap();
        free
    }

    #[test]
    fn lowest_index_comes_out_first() {
        let mut free = reserved(4);
        free.reset(4);
        assert_eq!(free.len(), 4);
        let order: Vec<usize> = core::iter::from_fn(|| free.pop()).map(Handle::to_index).collect();
        assert_eq!(order, [0, 1, 2, 3]);
        assert!(free.is_empty());
    }

    #[test]
    fn most_recently_freed_slot_is_reused() {
        let mut free = reserved(4);
        free.reset(4);
        let a = free.pop().unwrap();
        let b = free.pop().unwrap();
        free.push(a);
        free.push(b);
        assert_eq!(free.pop(), Some(b));
        assert_eq!(free.pop(), Some(a));
    }

    #[test]
    fn pop_on_empty_is_exhausted() {
        let mut free = FreeList::new();
        assert_eq!(free.pop(), None);
        free.try_reserve_total(2).unwrap();
        free.extend_range(0..1);
        assert!(free.pop().is_some());
        assert_eq!(free.pop(), None);
    }

    #[test]
    fn extend_range_appends_above_existing() {
        let mut free = reserved(8);
        free.extend_range(0..2);
        free.extend_range(4..6);
        let order: Vec<usize> = core::iter::from_fn(|| free.pop()).map(Handle::to_index).collect();
        assert_eq!(order, [4, 5, 0, 1]);
    }
}
