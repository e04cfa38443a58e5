//! Output sinks for the demonstration. Nothing in [`sequence`](crate::sequence) or
//! [`growth`](crate::growth) prints; results are handed to a [`Report`] instead.

mod writer;

pub use writer::*;

use std::io;

use crate::growth::SimulatedStep;
use crate::sequence::GrowthStep;

/// Receives everything the demonstration wants to show.
pub trait Report {
    /// Starts a new section titled `title`.
    fn section(&mut self, title: &str) -> io::Result<()>;

    /// Reports one observed append.
    fn observed(&mut self, step: &GrowthStep) -> io::Result<()>;

    /// Announces a simulation of `steps` steps starting at `start_cap`.
    fn simulation(&mut self, start_cap: usize, steps: usize) -> io::Result<()>;

    /// Reports one simulated capacity.
    fn simulated(&mut self, step: &SimulatedStep) -> io::Result<()>;
}

/// Renders `len` filled cells followed by `cap - len` empty ones.
///
/// # Examples
/// ```
/// # use slice_growth::report::render_bar;
/// assert_eq!(render_bar(3, 4), "███░");
/// ```
pub fn render_bar(len: usize, cap: usize) -> String {
    let mut bar = "█".repeat(len);
    bar.push_str(&"░".repeat(cap.saturating_sub(len)));
    bar
}
