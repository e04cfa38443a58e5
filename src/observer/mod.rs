//! Records how a [`GrowableSequence`](crate::sequence::GrowableSequence) grows, one append at a
//! time.

mod observer;
mod tests;

pub use observer::*;
