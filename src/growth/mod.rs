//! Capacity growth policies and a simulator that applies them without allocating anything.
//!
//! A [`GrowthRule`] decides the next capacity of a full
//! [`GrowableSequence`](crate::sequence::GrowableSequence). [`simulate`] walks the same rule as
//! pure arithmetic, which makes it usable as an oracle for the real thing.
#![warn(missing_docs)]

mod rule;
mod simulate;
mod tests;

pub use rule::*;
pub use simulate::*;
