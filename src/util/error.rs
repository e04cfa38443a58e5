use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A capacity that can't be represented, either because the arithmetic overflowed [`usize`] or
/// because the resulting allocation would exceed [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A sequence was requested with more initialized elements than reserved slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Length {len} exceeds capacity {cap}!")]
pub struct LenExceedsCap {
    pub len: usize,
    pub cap: usize,
}

/// Any error produced while constructing or growing a
/// [`GrowableSequence`](crate::sequence::GrowableSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SequenceError {
    CapacityOverflow(CapacityOverflow),
    LenExceedsCap(LenExceedsCap),
}
