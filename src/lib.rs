//! This crate is my take on watching a growable sequence grow.
//!
//! # Purpose
//! Every growable array quietly decides how much room to reserve when it runs out. This crate
//! makes that decision visible from two sides:
//! - [`sequence::GrowableSequence`] is a real contiguous sequence. After each append you can read
//!   its length, its capacity and a [`StorageId`](sequence::StorageId) that changes exactly when
//!   the elements were moved to a new block.
//! - [`growth::simulate`] applies the same [`GrowthRule`](growth::GrowthRule) as plain
//!   arithmetic, without allocating anything.
//!
//! Because both sides share the rule, the simulation can be used to predict (and test) the real
//! thing. [`observer::GrowthObserver`] records the real side one append at a time, and
//! [`demo::Demo`] prints both through a [`report::Report`].
//!
//! # Growth Rule
//! The default rule, [`QuarterGrowth`](growth::QuarterGrowth), bootstraps an empty sequence to a
//! capacity of 1, doubles until 256, then grows by `(cap + 768) / 4`. It is a teaching
//! approximation of how a garbage collected runtime grows its slices, not the exact policy of
//! any runtime. Swap in another [`GrowthRule`](growth::GrowthRule) to model something else.
//!
//! # Error Handling
//! Appending is treated as infallible: running out of address space panics, the same way it would
//! for [`Vec`]. Every panicking method has a `try_` counterpart returning a strongly typed error
//! instead. Errors are plain structs implementing [`Error`](std::error::Error), combined into enums
//! for static dispatch.
//!
//! # Dependencies
//! Apart from `std`, the crate only uses `derive_more` to avoid writing `Display` and `Error`
//! impls by hand.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod demo;
pub mod growth;
pub mod observer;
pub mod report;
pub mod sequence;

pub(crate) mod util;

pub use util::error::{CapacityOverflow, LenExceedsCap, SequenceError};
