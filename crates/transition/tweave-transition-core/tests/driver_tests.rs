use std::cell::RefCell;
use std::rc::Rc;

use tweave_test_fixtures::{number, Probe};
use tweave_transition_core::{TargetHandle, Tweener, Value};

fn probe_target(props: &[(&str, Value)]) -> (Rc<RefCell<Probe>>, TargetHandle) {
    let probe = Rc::new(RefCell::new(Probe::new(props)));
    let handle: TargetHandle = probe.clone();
    (probe, handle)
}

/// it should tick exactly once per integer millisecond in deterministic
/// mode, with elapsed 1..=duration
#[test]
fn deterministic_run_ticks_once_per_millisecond() {
    let tweener = Tweener::deterministic();
    let (probe, target) = probe_target(&[("x", Value::f(0.0))]);

    let transition = tweener.transition(&target);
    transition.duration(1000.0).set("x", 1000.0).unwrap();
    transition.run().unwrap();

    let probe = probe.borrow();
    assert_eq!(probe.write_count(), 1000);
    assert_eq!(probe.writes[0].1, Value::f(1.0));
    assert_eq!(probe.writes[499].1, Value::f(500.0));
    assert_eq!(probe.last_write().unwrap().1, Value::f(1000.0));
    assert!(transition.is_stopped());
}

/// it should cut a runaway deterministic run off at the iteration ceiling
/// and leave the transition unfinished
#[test]
fn ceiling_bounds_a_deterministic_run()  {
    let tweener = Tweener::deterministic_with_ceiling(50);
    let (probe, target) = probe_target(&[("x", Value::f(0.0))]);

    let transition = tweener.transition(&target);
    transition.duration(1_000_000_000.0).set("x", 1.0).unwrap();
    transition.run().unwrap();

    assert_eq!(probe.borrow().write_count(), 50);
    assert!(!transition.is_stopped());
    assert!(transition.is_active());
}

/// it should disable implicit scheduling in deterministic mode: nothing
/// runs until run() is called
#[test]
fn deterministic_mode_requires_explicit_run() {
    let tweener = Tweener::deterministic();
    let target = tweave_test_fixtures::node(&[("x", Value::f(0.0))]);

    let transition = tweener.transition(&target);
    transition.duration(10.0).set("x", 10.0).unwrap();

    // the debounced execution was dropped, not deferred
    assert_eq!(number(&target, "x"), 0.0);
    assert!(tweener.active_transition(&target).is_none());

    transition.run().unwrap();
    assert_eq!(number(&target, "x"), 10.0);
}
