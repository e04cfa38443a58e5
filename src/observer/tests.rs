#![cfg(test)]

use super::*;
use crate::growth::{simulate, Doubling, GrowthRule, QuarterGrowth};
use crate::sequence::GrowthStep;

#[test]
fn test_twenty_appends() {
    let mut observer = GrowthObserver::new();
    let steps = observer.run(20);

    assert_eq!(steps.len(), 20);
    assert_eq!(
        steps.iter().map(|step| step.cap).collect::<Vec<_>>(),
        [1, 2, 4, 4, 8, 8, 8, 8, 16, 16, 16, 16, 16, 16, 16, 16, 32, 32, 32, 32]
    );
    assert_eq!(
        steps.iter().filter(|step| step.reallocated).map(|step| step.step).collect::<Vec<_>>(),
        [0, 1, 2, 4, 8, 16],
        "Reallocations should happen exactly when the sequence was full."
    );
    assert!(steps.iter().enumerate().all(|(i, step)| step.step == i && step.len == i + 1));
    assert!(observer.sequence().iter().copied().eq(0..20));
}

#[test]
fn test_step_properties() {
    let mut observer = GrowthObserver::new();
    observer.run(3000);

    let mut previous: Option<&GrowthStep> = None;
    for step in observer.steps() {
        assert!(step.len <= step.cap, "Length should never exceed capacity.");

        let (prev_len, prev_cap, prev_storage) = previous
            .map_or((0, 0, None), |prev| (prev.len, prev.cap, Some(prev.storage)));
        assert!(step.cap >= prev_cap, "Capacity should never decrease.");
        assert_eq!(
            step.reallocated,
            prev_len == prev_cap,
            "A reallocation should happen iff the sequence was full before the append."
        );
        if let Some(storage) = prev_storage {
            assert_eq!(step.reallocated, storage != step.storage);
        }

        previous = Some(step);
    }
}

#[test]
fn test_cross_check_with_simulation() {
    let mut observer = GrowthObserver::new();
    observer.run(5000);

    let changes = observer.capacity_changes();
    let simulated: Vec<usize> = simulate(QuarterGrowth, 0, changes.len()).capacities().collect();
    assert_eq!(&*changes, &*simulated, "Observed and simulated capacities should agree.");

    let mut observer = GrowthObserver::with_rule(Doubling::new(5));
    observer.run(100);
    let changes = observer.capacity_changes();
    let simulated: Vec<usize> = simulate(Doubling::new(5), 0, changes.len()).capacities().collect();
    assert_eq!(&*changes, &*simulated, "The cross check should hold for any rule.");
}

#[test]
fn test_run_continues() {
    let mut observer = GrowthObserver::new();
    observer.run(3);
    let more = observer.run(2);

    assert_eq!(more.iter().map(|step| step.step).collect::<Vec<_>>(), [3, 4]);
    assert_eq!(observer.steps().len(), 5);
    assert_eq!(&**observer.sequence(), &[0, 1, 2, 3, 4]);

    let step = observer.append(99);
    assert_eq!((step.step, step.len, step.cap), (5, 6, 8));
    assert!(!step.reallocated);
    assert_eq!(observer.sequence().cap(), QuarterGrowth.grow(4));
}

#[test]
fn test_empty_observer() {
    let observer = GrowthObserver::default();
    assert!(observer.steps().is_empty());
    assert_eq!(&*observer.capacity_changes(), &[0]);
}
