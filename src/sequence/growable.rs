use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::block::Block;
use super::{Appended, GrowthStep, StorageId};
use crate::growth::{GrowthRule, QuarterGrowth};
use crate::util::error::{CapacityOverflow, LenExceedsCap, SequenceError};
use crate::util::result::ResultExtension;

/// A variable size contiguous collection whose growth is decided by a [`GrowthRule`].
///
/// Capacity only changes when an append finds the sequence full. At that point a new block is
/// allocated with the capacity the rule asks for, the elements are moved over and the
/// [`StorageId`] changes. Nothing ever shrinks the capacity.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the sequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `cap` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `observe` | `O(1)` |
///
/// \* If the sequence doesn't have enough capacity for the new element, `append` will take `O(n)`.
pub struct GrowableSequence<T, R: GrowthRule = QuarterGrowth> {
    block: Block<T>,
    len: usize,
    rule: R,
}

impl<T> GrowableSequence<T> {
    /// Creates an empty sequence using [`QuarterGrowth`]. Nothing is allocated until the first
    /// append.
    ///
    /// # Examples
    /// ```
    /// # use slice_growth::sequence::GrowableSequence;
    /// let seq: GrowableSequence<u8> = GrowableSequence::new();
    /// assert_eq!(seq.len(), 0);
    /// assert_eq!(seq.cap(), 0);
    /// ```
    pub const fn new() -> GrowableSequence<T> {
        GrowableSequence::with_rule(QuarterGrowth)
    }

    /// Creates an empty sequence with exactly `cap` reserved slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use slice_growth::sequence::GrowableSequence;
    /// let mut seq = GrowableSequence::with_cap(10);
    /// let id = seq.storage_id();
    /// seq.extend([5, 6, 7, 8]);
    /// assert_eq!((seq.len(), seq.cap()), (4, 10));
    /// assert_eq!(seq.storage_id(), id);
    /// ```
    pub fn with_cap(cap: usize) -> GrowableSequence<T> {
        GrowableSequence::with_cap_and_rule(cap, QuarterGrowth)
    }

    /// Creates a sequence holding `len` copies of `fill`, with exactly `cap` reserved slots.
    ///
    /// # Errors
    /// Returns [`LenExceedsCap`] if `len > cap`, or [`CapacityOverflow`] if the memory layout
    /// size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use slice_growth::sequence::GrowableSequence;
    /// let seq = GrowableSequence::try_with_len(5, 10, 0).unwrap();
    /// assert_eq!(&*seq, &[0, 0, 0, 0, 0]);
    /// assert_eq!(seq.cap(), 10);
    ///
    /// assert!(GrowableSequence::try_with_len(5, 3, 0).unwrap_err().is_len_exceeds_cap());
    /// ```
    pub fn try_with_len(len: usize, cap: usize, fill: T) -> Result<GrowableSequence<T>, SequenceError>
    where
        T: Clone,
    {
        GrowableSequence::try_with_len_and_rule(len, cap, fill, QuarterGrowth)
    }
}

impl<T, R: GrowthRule> GrowableSequence<T, R> {
    /// Creates an empty sequence that grows according to `rule`.
    ///
    /// # Examples
    /// ```
    /// # use slice_growth::growth::Doubling;
    /// # use slice_growth::sequence::GrowableSequence;
    /// let mut seq = GrowableSequence::with_rule(Doubling::new(4));
    /// seq.append('a');
    /// assert_eq!(seq.cap(), 4);
    /// ```
    pub const fn with_rule(rule: R) -> GrowableSequence<T, R> {
        GrowableSequence {
            block: Block::empty(),
            len: 0,
            rule,
        }
    }

    /// Creates an empty sequence with exactly `cap` reserved slots that grows according to `rule`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap_and_rule(cap: usize, rule: R) -> GrowableSequence<T, R> {
        GrowableSequence::try_with_cap_and_rule(cap, rule).throw()
    }

    /// Fallible version of [`with_cap_and_rule`](GrowableSequence::with_cap_and_rule).
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory layout size would exceed [`isize::MAX`].
    pub fn try_with_cap_and_rule(cap: usize, rule: R) -> Result<GrowableSequence<T, R>, CapacityOverflow> {
        let block = if cap == 0 {
            Block::empty()
        } else {
            Block::try_alloc(cap, StorageId::EMPTY.next())?
        };

        Ok(GrowableSequence { block, len: 0, rule })
    }

    /// Creates a sequence holding `len` copies of `fill`, with exactly `cap` reserved slots, that
    /// grows according to `rule`.
    ///
    /// # Errors
    /// Returns [`LenExceedsCap`] if `len > cap`, or [`CapacityOverflow`] if the memory layout
    /// size would exceed [`isize::MAX`].
    pub fn try_with_len_and_rule(
        len: usize,
        cap: usize,
        fill: T,
        rule: R,
    ) -> Result<GrowableSequence<T, R>, SequenceError>
    where
        T: Clone,
    {
        if len > cap {
            return Err(LenExceedsCap { len, cap }.into());
        }

        let mut seq = GrowableSequence::try_with_cap_and_rule(cap, rule)?;
        for _ in 0..len {
            // SAFETY: len <= cap, so every write is within the block. len is bumped after each
            // write so a panicking clone can't leak uninitialized slots into the sequence.
            unsafe { seq.block.write(seq.len, fill.clone()); }
            seq.len += 1;
        }

        Ok(seq)
    }

    /// Returns the number of elements in the sequence.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the sequence contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the current block can hold before the next reallocation.
    pub const fn cap(&self) -> usize {
        self.block.cap()
    }

    /// Returns the id of the current backing block.
    pub const fn storage_id(&self) -> StorageId {
        self.block.id()
    }

    /// Returns the growth rule of this sequence.
    pub const fn rule(&self) -> &R {
        &self.rule
    }

    /// Appends `value` to the end of the sequence, moving to a bigger block if it is full.
    ///
    /// # Panics
    /// Panics if the growth rule overflows or the memory layout of the new block would exceed
    /// [`isize::MAX`], or if the rule fails to increase the capacity.
    ///
    /// # Examples
    /// ```
    /// # use slice_growth::sequence::{Appended, GrowableSequence};
    /// let mut seq = GrowableSequence::new();
    /// assert_eq!(seq.append(1), Appended::Reallocated { from: 0, to: 1 });
    /// assert_eq!(seq.append(2), Appended::Reallocated { from: 1, to: 2 });
    /// assert_eq!(seq.append(3), Appended::Reallocated { from: 2, to: 4 });
    /// assert_eq!(seq.append(4), Appended::InPlace);
    /// assert_eq!(&*seq, &[1, 2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn append(&mut self, value: T) -> Appended {
        self.try_append(value).throw()
    }

    /// Fallible version of [`append`](GrowableSequence::append). On error the sequence is left
    /// untouched and `value` is dropped.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the growth rule overflows or the new block would exceed
    /// [`isize::MAX`] bytes.
    ///
    /// # Panics
    /// Panics if the growth rule returns a capacity that isn't larger than the current one.
    pub fn try_append(&mut self, value: T) -> Result<Appended, CapacityOverflow> {
        let outcome = if self.len == self.cap() {
            let from = self.cap();
            let to = self.rule.try_grow(from)?;
            self.realloc_with_cap(to)?;
            Appended::Reallocated { from, to }
        } else {
            Appended::InPlace
        };

        // SAFETY: The sequence either had spare capacity or has just been given some.
        unsafe { self.block.write(self.len, value); }
        self.len += 1;

        Ok(outcome)
    }

    /// Takes a snapshot of the sequence for the append numbered `step`. `previous` is the storage
    /// id from before that append and decides whether the step counts as a reallocation.
    ///
    /// # Examples
    /// ```
    /// # use slice_growth::sequence::GrowableSequence;
    /// let mut seq = GrowableSequence::with_cap(2);
    /// let before = seq.storage_id();
    /// seq.append(7);
    /// let step = seq.observe(0, before);
    /// assert_eq!((step.len, step.cap, step.reallocated), (1, 2, false));
    /// ```
    pub const fn observe(&self, step: usize, previous: StorageId) -> GrowthStep {
        let storage = self.storage_id();
        GrowthStep {
            step,
            len: self.len,
            cap: self.cap(),
            storage,
            reallocated: storage.generation() != previous.generation(),
        }
    }

    /// Moves the elements into a new block with room for `new_cap` elements.
    ///
    /// # Panics
    /// Panics if `new_cap` isn't larger than the current capacity.
    fn realloc_with_cap(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        assert!(
            new_cap > self.cap(),
            "growth rule must increase the capacity, got {} from {}",
            new_cap,
            self.cap()
        );

        let mut new_block = Block::try_alloc(new_cap, self.block.id().next())?;

        // SAFETY: The first len slots of the old block are initialized and len <= old cap < new
        // cap. The old block is dropped right after, which only deallocates it.
        unsafe { self.block.move_into(&mut new_block, self.len); }
        self.block = new_block;

        Ok(())
    }
}

impl<T, R: GrowthRule> Extend<T> for GrowableSequence<T, R> {
    /// Appends every item in turn, so each one may trigger its own reallocation.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T, R: GrowthRule + Default> FromIterator<T> for GrowableSequence<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = GrowableSequence::with_rule(R::default());
        seq.extend(iter);
        seq
    }
}

impl<T, R: GrowthRule + Default> Default for GrowableSequence<T, R> {
    fn default() -> Self {
        GrowableSequence::with_rule(R::default())
    }
}

impl<T, R: GrowthRule> Drop for GrowableSequence<T, R> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and dropped exactly once here. The
        // block itself only deallocates when it is dropped afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.block.as_ptr(), self.len));
        }
    }
}

impl<T, R: GrowthRule> Deref for GrowableSequence<T, R> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The block is valid and properly aligned for len initialized values, and its
        // size never exceeds isize::MAX bytes. The pointer is dangling but aligned when len is 0.
        unsafe { slice::from_raw_parts(self.block.as_ptr(), self.len) }
    }
}

impl<T, R: GrowthRule> DerefMut for GrowableSequence<T, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the &mut self borrow guarantees unique access.
        unsafe { slice::from_raw_parts_mut(self.block.as_ptr(), self.len) }
    }
}

impl<T, R: GrowthRule> AsRef<[T]> for GrowableSequence<T, R> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, R: GrowthRule> Borrow<[T]> for GrowableSequence<T, R> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<'a, T, R: GrowthRule> IntoIterator for &'a GrowableSequence<T, R> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// SAFETY: A GrowableSequence uniquely owns its block, so it is Send when its contents and rule are.
unsafe impl<T: Send, R: GrowthRule + Send> Send for GrowableSequence<T, R> {}
// SAFETY: The safe API follows the borrow checker without interior mutability, so shared access
// is Sync when the contents and rule are.
unsafe impl<T: Sync, R: GrowthRule + Sync> Sync for GrowableSequence<T, R> {}

impl<T: Clone, R: GrowthRule + Clone> Clone for GrowableSequence<T, R> {
    /// Clones into a fresh block of the same capacity. The clone starts its own storage ids.
    fn clone(&self) -> Self {
        let mut seq = GrowableSequence::with_cap_and_rule(self.cap(), self.rule.clone());

        for value in self.iter() {
            seq.append(value.clone());
        }

        seq
    }
}

impl<T: Debug, R: GrowthRule> Debug for GrowableSequence<T, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableSequence")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("storage", &self.storage_id())
            .finish()
    }
}

impl<T: PartialEq, R: GrowthRule> PartialEq for GrowableSequence<T, R> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq, R: GrowthRule> Eq for GrowableSequence<T, R> {}
