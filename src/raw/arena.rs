use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use super::free_list::FreeList;
use super::handle::Handle;

/// Fixed-capacity slot storage addressed by [`Handle`].
///
/// `slots.len()` is the logical capacity. Every index below it is either live
/// (`Some`) or on the free list, never both.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: FreeList,
}

impl<T> Arena<T> {
    /// Creates an arena with `capacity` free slots.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut arena = Self {
            slots: Vec::new(),
            free: FreeList::new(),
        };
        arena.grow(capacity)?;
        Ok(arena)
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[cfg(test)]
    pub(crate) fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Returns true when the next `alloc` would need the arena to grow first.
    pub(crate) fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Stores `element` in the most recently freed slot.
    ///
    /// # Panics
    ///
    /// Panics if no slot is free. Callers grow the arena beforehand.
    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        let handle = self.free.pop().expect("`Arena::alloc()` - no free slot!");
        let slot = &mut self.slots[handle.to_index()];
        debug_assert!(slot.is_none(), "`Arena::alloc()` - free slot is occupied!");
        *slot = Some(element);
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Moves the element out and returns its slot to the free list.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    /// Drops every live element. Capacity is retained and every slot is free.
    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.free.reset(self.slots.len());
    }

    /// Grows the arena to `capacity` slots, all of the new ones free.
    ///
    /// Both buffers are reserved before anything is modified, so on error the
    /// arena is exactly as it was. Existing handles stay valid.
    pub(crate) fn grow(&mut self, capacity: usize) -> Result<(), TryReserveError> {
        let old = self.slots.len();
        if capacity <= old {
            return Ok(());
        }

        self.slots.try_reserve_exact(capacity - old)?;
        self.free.try_reserve_total(capacity)?;

        self.slots.resize_with(capacity, || None);
        self.free.extend_range(old..capacity);
        Ok(())
    }
}
