//! The fixed demonstration run by the binary.

mod demo;

pub use demo::*;
