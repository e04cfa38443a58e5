use crate::growth::{Doubling, GrowthRule, QuarterGrowth};
use crate::sequence::{GrowableSequence, GrowthStep};

/// Appends into a sequence and keeps a [`GrowthStep`] for every append.
///
/// The log is itself a GrowableSequence, using a plain [`Doubling`] rule.
///
/// # Examples
/// ```
/// # use slice_growth::observer::GrowthObserver;
/// let mut observer = GrowthObserver::new();
/// let steps = observer.run(5);
/// assert_eq!(steps.iter().map(|s| s.cap).collect::<Vec<_>>(), [1, 2, 4, 4, 8]);
/// assert_eq!(steps.iter().filter(|s| s.reallocated).count(), 4);
/// ```
#[derive(Debug)]
pub struct GrowthObserver<R: GrowthRule = QuarterGrowth> {
    sequence: GrowableSequence<usize, R>,
    log: GrowableSequence<GrowthStep, Doubling>,
}

impl GrowthObserver {
    /// Creates an observer over an empty sequence using [`QuarterGrowth`].
    pub const fn new() -> GrowthObserver {
        GrowthObserver::with_rule(QuarterGrowth)
    }
}

impl Default for GrowthObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GrowthRule> GrowthObserver<R> {
    /// Creates an observer over an empty sequence that grows according to `rule`.
    pub const fn with_rule(rule: R) -> GrowthObserver<R> {
        GrowthObserver {
            sequence: GrowableSequence::with_rule(rule),
            log: GrowableSequence::with_rule(Doubling::new(16)),
        }
    }

    /// Appends `value`, then records and returns the resulting step.
    ///
    /// # Panics
    /// Panics if the sequence can't grow any further, see
    /// [`GrowableSequence::append`].
    pub fn append(&mut self, value: usize) -> GrowthStep {
        let previous = self.sequence.storage_id();
        self.sequence.append(value);

        let step = self.sequence.observe(self.log.len(), previous);
        self.log.append(step);
        step
    }

    /// Appends `appends` values, each one equal to the index of its step, and returns the steps
    /// recorded by this call. Calling it again continues where the last call stopped.
    ///
    /// # Panics
    /// Panics if the sequence can't grow any further, see
    /// [`GrowableSequence::append`].
    pub fn run(&mut self, appends: usize) -> &[GrowthStep] {
        let start = self.log.len();
        for value in start..start + appends {
            self.append(value);
        }

        &self.log[start..]
    }

    /// Returns every step recorded so far.
    pub fn steps(&self) -> &[GrowthStep] {
        &self.log
    }

    /// Returns the observed sequence.
    pub const fn sequence(&self) -> &GrowableSequence<usize, R> {
        &self.sequence
    }

    /// Returns the capacity of the empty starting sequence (0) followed by every capacity the
    /// sequence was reallocated to, in order. A simulation of the same rule starting at 0 should
    /// produce exactly these values.
    pub fn capacity_changes(&self) -> GrowableSequence<usize, Doubling> {
        let mut changes = GrowableSequence::default();
        changes.append(0);
        changes.extend(self.log.iter().filter(|step| step.reallocated).map(|step| step.cap));
        changes
    }
}
