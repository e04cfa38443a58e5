use std::io;

use crate::growth::{simulate, Doubling, QuarterGrowth};
use crate::observer::GrowthObserver;
use crate::report::Report;
use crate::sequence::GrowableSequence;

/// Parameters of the demonstration: one observed walk of `appends` appends, then one simulation
/// per `(start_cap, steps)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demo {
    pub appends: usize,
    pub simulations: GrowableSequence<(usize, usize), Doubling>,
}

impl Demo {
    pub fn new(
        appends: usize,
        simulations: impl IntoIterator<Item = (usize, usize)>,
    ) -> Demo {
        Demo {
            appends,
            simulations: simulations.into_iter().collect(),
        }
    }

    /// Runs the demonstration, sending everything to `report`.
    ///
    /// # Errors
    /// Returns the first error produced by `report`.
    pub fn run<P: Report>(&self, report: &mut P) -> io::Result<()> {
        report.section("Slice growth (real sequence)")?;

        let mut observer = GrowthObserver::new();
        for step in observer.run(self.appends) {
            report.observed(step)?;
        }

        report.section("Capacity growth rule simulator (no real sequence)")?;

        for &(start_cap, steps) in self.simulations.iter() {
            report.simulation(start_cap, steps)?;
            for step in simulate(QuarterGrowth, start_cap, steps) {
                report.simulated(&step)?;
            }
        }

        Ok(())
    }
}

impl Default for Demo {
    fn default() -> Self {
        Demo::new(20, [(1, 20), (260, 8)])
    }
}
