#![cfg(test)]

use super::*;
use crate::util::error::CapacityOverflow;
use crate::util::panic::assert_panics;

#[test]
fn test_quarter_growth_oracle() {
    let rule = QuarterGrowth;
    assert_eq!(rule.grow(0), 1, "An empty sequence should bootstrap to a capacity of 1.");
    assert_eq!(rule.grow(1), 2);
    assert_eq!(rule.grow(128), 256);
    assert_eq!(rule.grow(255), 510, "Capacities below the threshold should still double.");

    for cap in [256, 257, 260, 517, 1000, 4096, 1 << 20] {
        assert_eq!(
            rule.grow(cap),
            cap + (cap + 768) / 4,
            "Capacities from the threshold on should grow additively."
        );
    }
    assert_eq!(rule.grow(256), 512, "The offset should make the threshold itself double.");
}

#[test]
fn test_quarter_growth_regimes() {
    let rule = QuarterGrowth;
    assert!(rule.regime(0).is_bootstrap());
    assert!(rule.regime(1).is_doubling());
    assert!(rule.regime(255).is_doubling());
    assert!(rule.regime(256).is_additive());
    assert_eq!(rule.regime(usize::MAX), Regime::Additive);
}

#[test]
fn test_growth_is_strict() {
    let mut cap = 0;
    for _ in 0..64 {
        let Ok(next) = QuarterGrowth.try_grow(cap) else { break };
        assert!(next > cap, "Every growth step should increase the capacity.");
        cap = next;
    }
}

#[test]
fn test_overflow() {
    assert_eq!(QuarterGrowth.try_grow(usize::MAX), Err(CapacityOverflow));
    assert_eq!(QuarterGrowth.try_grow(usize::MAX - 100), Err(CapacityOverflow));
    assert_eq!(Doubling::default().try_grow(usize::MAX / 2 + 1), Err(CapacityOverflow));

    assert_panics!({
        QuarterGrowth.grow(usize::MAX);
    });
}

#[test]
fn test_doubling() {
    let rule = Doubling::default();
    assert_eq!(rule.min_cap(), 2);
    assert_eq!(rule.grow(0), 2, "The first allocation should use the minimum capacity.");
    assert_eq!(rule.grow(1), 2);
    assert_eq!(rule.grow(300), 600, "Doubling has no additive regime.");
    assert!(rule.regime(300).is_doubling());

    assert_eq!(Doubling::new(0).min_cap(), 1, "A minimum of zero should be raised to one.");
    assert_eq!(Doubling::new(0).grow(0), 1);
}

#[test]
fn test_simulate_scenarios() {
    let caps: Vec<usize> = simulate(QuarterGrowth, 1, 20).capacities().collect();
    assert_eq!(caps.len(), 20);
    assert_eq!(&caps[..10], &[1, 2, 4, 8, 16, 32, 64, 128, 256, 512]);
    for pair in caps[9..].windows(2) {
        assert_eq!(
            pair[1],
            pair[0] + (pair[0] + 768) / 4,
            "After reaching 256, growth should switch to the additive rule."
        );
    }

    let caps: Vec<usize> = simulate(QuarterGrowth, 260, 8).capacities().collect();
    assert_eq!(caps.len(), 8);
    assert_eq!(&caps[..3], &[260, 517, 838]);
    assert_eq!(caps[3], 838 + (838 + 768) / 4);
}

#[test]
fn test_simulate_steps_and_regimes() {
    let steps: Vec<SimulatedStep> = simulate(QuarterGrowth, 0, 3).collect();
    assert_eq!(
        steps,
        [
            SimulatedStep { step: 0, cap: 0, regime: Regime::Bootstrap },
            SimulatedStep { step: 1, cap: 1, regime: Regime::Doubling },
            SimulatedStep { step: 2, cap: 2, regime: Regime::Doubling },
        ]
    );

    assert_eq!(simulate(QuarterGrowth, 5, 0).count(), 0, "Zero steps should yield nothing.");
    assert_eq!(simulate(QuarterGrowth, 5, 1).capacities().collect::<Vec<_>>(), [5]);
}

#[test]
fn test_simulate_is_deterministic_and_restartable() {
    let first: Vec<SimulatedStep> = simulate(QuarterGrowth, 3, 15).collect();
    let second: Vec<SimulatedStep> = simulate(QuarterGrowth, 3, 15).collect();
    assert_eq!(first, second, "Identical inputs should produce identical simulations.");

    let mut sim = simulate(QuarterGrowth, 3, 15);
    let cloned = sim.clone();
    assert_eq!(sim.by_ref().take(4).count(), 4);
    assert_eq!(sim.size_hint(), (1, Some(11)));

    sim.restart();
    assert_eq!(sim.collect::<Vec<_>>(), first, "Restarting should replay from the first step.");
    assert_eq!(cloned.collect::<Vec<_>>(), first, "A clone should replay independently.");
}

#[test]
fn test_simulate_stops_on_overflow() {
    let mut sim = simulate(QuarterGrowth, usize::MAX - 1, 5);
    assert_eq!(sim.next().map(|step| step.cap), Some(usize::MAX - 1));
    assert_eq!(sim.next(), None, "The simulation should end once the rule overflows.");
    assert_eq!(sim.next(), None, "The simulation should stay finished.");
    assert_eq!(sim.size_hint(), (0, Some(0)));

    let last_only = simulate(QuarterGrowth, usize::MAX, 1);
    assert_eq!(
        last_only.count(),
        1,
        "The final step shouldn't be lost to an overflow it never needs to compute."
    );
}

#[test]
fn test_simulate_custom_rule() {
    struct Triple;

    impl GrowthRule for Triple {
        fn try_grow(&self, cap: usize) -> Result<usize, CapacityOverflow> {
            cap.checked_mul(3).map(|cap| cap.max(1)).ok_or(CapacityOverflow)
        }
    }

    let caps: Vec<usize> = simulate(Triple, 0, 5).capacities().collect();
    assert_eq!(caps, [0, 1, 3, 9, 27]);
    assert!(Triple.regime(0).is_bootstrap(), "The default regime should report bootstrap at 0.");
}
