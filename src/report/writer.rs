use std::io::{self, Write};

use super::{render_bar, Report};
use crate::growth::SimulatedStep;
use crate::sequence::GrowthStep;

/// A [`Report`] that writes plain text lines to any [`Write`].
#[derive(Debug)]
pub struct WriterReport<W: Write> {
    out: W,
}

impl<W: Write> WriterReport<W> {
    pub const fn new(out: W) -> WriterReport<W> {
        WriterReport { out }
    }

    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Report for WriterReport<W> {
    fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "=== {title} ===")
    }

    fn observed(&mut self, step: &GrowthStep) -> io::Result<()> {
        let marker = if step.reallocated {
            "  <-- capacity changed, moved to a new block"
        } else {
            ""
        };

        writeln!(
            self.out,
            "append({:2}) -> len={:2} cap={:2} storage={}{}",
            step.step, step.len, step.cap, step.storage, marker
        )?;
        writeln!(self.out, "   [len|cap] {}", render_bar(step.len, step.cap))?;
        writeln!(self.out)
    }

    fn simulation(&mut self, start_cap: usize, steps: usize) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Simulated growth starting at cap={start_cap} for {steps} steps:")
    }

    fn simulated(&mut self, step: &SimulatedStep) -> io::Result<()> {
        writeln!(self.out, " step {:2}: cap={:4} ({})", step.step, step.cap, step.regime)
    }
}
