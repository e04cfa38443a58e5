//! A growable contiguous sequence that makes its reallocations observable.
//!
//! [`GrowableSequence`] works much like a `Vec`, except that its growth is decided by a pluggable
//! [`GrowthRule`](crate::growth::GrowthRule) and every backing allocation carries a
//! [`StorageId`]. Comparing ids before and after an append tells you whether the elements were
//! moved, without looking at raw addresses.

mod block;
mod growable;
mod step;

pub use growable::*;
pub use step::*;
