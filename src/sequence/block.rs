use std::alloc::{self, Layout};
use std::mem::MaybeUninit;
use std::ptr::{self, NonNull};

use super::StorageId;
use crate::util::error::CapacityOverflow;

/// A fixed-size run of uninitialized slots for `T`, owned by a single sequence.
///
/// A Block never reads, writes or drops its contents on its own. Tracking which slots are
/// initialized is up to the owner; dropping a Block only returns the memory to the allocator.
pub(crate) struct Block<T> {
    ptr: NonNull<MaybeUninit<T>>,
    cap: usize,
    id: StorageId,
}

impl<T> Block<T> {
    /// Creates a Block with capacity 0 that owns no memory.
    pub(crate) const fn empty() -> Block<T> {
        Block {
            ptr: NonNull::dangling(),
            cap: 0,
            id: StorageId::EMPTY,
        }
    }

    /// Allocates a Block with room for exactly `cap` elements, tagged with `id`.
    ///
    /// Zero-sized layouts (a capacity of 0 or a zero-sized `T`) don't touch the allocator and use
    /// a dangling pointer instead.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout would exceed [`isize::MAX`] bytes. Allocation
    /// failure itself is passed to [`alloc::handle_alloc_error`].
    pub(crate) fn try_alloc(cap: usize, id: StorageId) -> Result<Block<T>, CapacityOverflow> {
        let layout = Self::make_layout(cap)?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            let raw_ptr: *mut MaybeUninit<T> = unsafe { alloc::alloc(layout).cast() };

            NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        };

        Ok(Block { ptr, cap, id })
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    pub(crate) const fn id(&self) -> StorageId {
        self.id
    }

    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Writes `value` into the slot at `index` without dropping whatever was there.
    ///
    /// # Safety
    /// `index` must be less than the capacity of the Block.
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY: The caller guarantees that index is in bounds, and the allocation never exceeds
        // isize::MAX bytes.
        unsafe { self.ptr.add(index).write(MaybeUninit::new(value)); }
    }

    /// Moves the first `count` elements of self into the start of `dest`. The moved-from slots of
    /// self must be treated as uninitialized afterwards.
    ///
    /// # Safety
    /// The first `count` slots of self must be initialized and `count` must not exceed the
    /// capacity of either Block.
    pub(crate) unsafe fn move_into(&self, dest: &mut Block<T>, count: usize) {
        // SAFETY: Both Blocks are separate allocations (or dangling for zero-sized layouts), so
        // they can't overlap. The caller guarantees both ranges are in bounds.
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), dest.ptr.as_ptr(), count); }
    }

    fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<MaybeUninit<T>>(cap).map_err(|_| CapacityOverflow)
    }
}

impl<T> Drop for Block<T> {
    fn drop(&mut self) {
        // The layout was valid when allocated, so this only bails for blocks that never were.
        let Ok(layout) = Self::make_layout(self.cap) else { return };

        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this exact layout. Zero-sized
            // layouts are never allocated and are guarded against here.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}
