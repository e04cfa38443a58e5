use std::iter::FusedIterator;

use super::{GrowthRule, Regime};

/// One capacity produced by a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedStep {
    /// Zero-based index of this step.
    pub step: usize,
    /// The simulated capacity.
    pub cap: usize,
    /// The branch of the rule that produces the capacity of the following step.
    pub regime: Regime,
}

/// A lazy walk of a [`GrowthRule`], created by [`simulate`].
///
/// Cloning a Simulation (or calling [`restart`](Simulation::restart)) replays it from the start.
/// No storage is allocated; only the current capacity is kept.
#[derive(Debug, Clone)]
pub struct Simulation<R> {
    rule: R,
    start_cap: usize,
    next_cap: Option<usize>,
    step: usize,
    steps: usize,
}

/// Simulates `steps` capacities of `rule`, beginning at `start_cap`.
///
/// The simulation ends early if the rule overflows before producing every step.
///
/// # Examples
/// ```
/// # use slice_growth::growth::{simulate, QuarterGrowth};
/// let caps: Vec<usize> = simulate(QuarterGrowth, 260, 3).capacities().collect();
/// assert_eq!(caps, [260, 517, 838]);
/// ```
pub fn simulate<R: GrowthRule>(rule: R, start_cap: usize, steps: usize) -> Simulation<R> {
    Simulation {
        rule,
        start_cap,
        next_cap: Some(start_cap),
        step: 0,
        steps,
    }
}

impl<R: GrowthRule> Simulation<R> {
    /// Returns the rule being simulated.
    pub const fn rule(&self) -> &R {
        &self.rule
    }

    /// Returns the capacity the simulation starts from.
    pub const fn start_cap(&self) -> usize {
        self.start_cap
    }

    /// Returns the number of steps requested.
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Rewinds the simulation to its first step.
    pub fn restart(&mut self) {
        self.next_cap = Some(self.start_cap);
        self.step = 0;
    }

    /// Adapts the simulation to yield bare capacities.
    pub fn capacities(self) -> impl Iterator<Item = usize> {
        self.map(|step| step.cap)
    }
}

impl<R: GrowthRule> Iterator for Simulation<R> {
    type Item = SimulatedStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.steps {
            return None;
        }

        let cap = self.next_cap.take()?;
        let current = SimulatedStep {
            step: self.step,
            cap,
            regime: self.rule.regime(cap),
        };

        self.step += 1;
        // Only grow when another step is wanted, so the last step can't overflow.
        if self.step < self.steps {
            self.next_cap = self.rule.try_grow(cap).ok();
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next_cap {
            Some(_) => {
                let remaining = self.steps - self.step;
                (remaining.min(1), Some(remaining))
            },
            None => (0, Some(0)),
        }
    }
}

impl<R: GrowthRule> FusedIterator for Simulation<R> {}
