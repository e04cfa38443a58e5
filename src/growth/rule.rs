use std::cmp;

use derive_more::{Display, IsVariant};

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;
const GROWTH_FACTOR: usize = 2;

/// The branch of a [`GrowthRule`] that applies to a given capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum Regime {
    /// The sequence has no storage yet.
    #[display("bootstrap")]
    Bootstrap,
    /// The capacity is multiplied.
    #[display("doubling")]
    Doubling,
    /// The capacity grows by a fraction of itself plus a fixed offset.
    #[display("additive")]
    Additive,
}

/// A policy mapping the capacity of a full sequence to the capacity of its next allocation.
///
/// Implementations must be pure: the same input always produces the same output, and any
/// successful result is strictly greater than the input.
pub trait GrowthRule {
    /// Returns the capacity that follows `cap`, or [`CapacityOverflow`] if it can't be represented.
    fn try_grow(&self, cap: usize) -> Result<usize, CapacityOverflow>;

    /// Returns the capacity that follows `cap`.
    ///
    /// # Panics
    /// Panics if the next capacity would overflow [`usize`].
    #[track_caller]
    fn grow(&self, cap: usize) -> usize {
        self.try_grow(cap).throw()
    }

    /// Returns the branch of this rule that [`try_grow`](GrowthRule::try_grow) takes for `cap`.
    fn regime(&self, cap: usize) -> Regime {
        if cap == 0 {
            Regime::Bootstrap
        } else {
            Regime::Doubling
        }
    }
}

/// The default rule: double small capacities, then grow by roughly a quarter.
///
/// - `0` becomes `1`.
/// - Below [`THRESHOLD`](QuarterGrowth::THRESHOLD), the capacity doubles.
/// - From there on, the capacity grows by `(cap + OFFSET) / DIVISOR`, rounded down.
///
/// The offset smooths the jump between the two regimes. It approximates the slice growth of a
/// garbage collected runtime rather than reproducing any exact constant.
///
/// # Examples
/// ```
/// # use slice_growth::growth::{GrowthRule, QuarterGrowth};
/// assert_eq!(QuarterGrowth.grow(0), 1);
/// assert_eq!(QuarterGrowth.grow(128), 256);
/// assert_eq!(QuarterGrowth.grow(260), 517);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuarterGrowth;

impl QuarterGrowth {
    /// The first capacity that grows additively.
    pub const THRESHOLD: usize = 256;
    /// Added to the capacity before dividing in the additive regime.
    pub const OFFSET: usize = 768;
    /// Divisor of the additive regime, giving roughly 25% growth.
    pub const DIVISOR: usize = 4;
}

impl GrowthRule for QuarterGrowth {
    fn try_grow(&self, cap: usize) -> Result<usize, CapacityOverflow> {
        match self.regime(cap) {
            Regime::Bootstrap => Ok(1),
            // cap < THRESHOLD here, so this can't overflow.
            Regime::Doubling => Ok(cap * GROWTH_FACTOR),
            Regime::Additive => {
                let extra = cap.checked_add(Self::OFFSET).ok_or(CapacityOverflow)? / Self::DIVISOR;
                cap.checked_add(extra).ok_or(CapacityOverflow)
            },
        }
    }

    fn regime(&self, cap: usize) -> Regime {
        match cap {
            0 => Regime::Bootstrap,
            cap if cap < Self::THRESHOLD => Regime::Doubling,
            _ => Regime::Additive,
        }
    }
}

/// Plain geometric growth: the capacity doubles, but never drops below `min_cap`.
///
/// # Examples
/// ```
/// # use slice_growth::growth::{Doubling, GrowthRule};
/// let rule = Doubling::new(4);
/// assert_eq!(rule.grow(0), 4);
/// assert_eq!(rule.grow(4), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doubling {
    min_cap: usize,
}

impl Doubling {
    /// Creates a doubling rule whose first allocation holds `min_cap` elements. A `min_cap` of 0
    /// is raised to 1, otherwise an empty sequence could never grow.
    pub const fn new(min_cap: usize) -> Doubling {
        Doubling {
            min_cap: if min_cap == 0 { 1 } else { min_cap },
        }
    }

    /// Returns the smallest capacity this rule ever produces.
    pub const fn min_cap(&self) -> usize {
        self.min_cap
    }
}

impl Default for Doubling {
    fn default() -> Self {
        Doubling::new(MIN_CAP)
    }
}

impl GrowthRule for Doubling {
    fn try_grow(&self, cap: usize) -> Result<usize, CapacityOverflow> {
        cap.checked_mul(GROWTH_FACTOR)
            .map(|new_cap| cmp::max(new_cap, self.min_cap))
            .ok_or(CapacityOverflow)
    }
}
