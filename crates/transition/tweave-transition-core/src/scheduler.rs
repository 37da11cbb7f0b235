//! Transition factory and active-transition bookkeeping.
//!
//! The `Tweener` owns what the engine shares across transitions: the
//! injected tick driver, the default timing configuration, and the table
//! mapping each target to the transition currently allowed to write its
//! properties. Targets are keyed by handle identity; the table holds the
//! single shared mutable resource of the whole engine.

use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;
use tweave_api_core::TargetHandle;

use crate::config::TransitionConfig;
use crate::driver::{SyncDriver, TickDriver};
use crate::transition::Transition;

pub(crate) type TargetKey = usize;

/// Identity of a target handle: pointer identity of the shared allocation.
pub(crate) fn target_key(handle: &TargetHandle) -> TargetKey {
    Rc::as_ptr(handle) as *const () as TargetKey
}

/// State shared by the factory and every transition it creates.
pub(crate) struct SchedulerCore {
    pub(crate) driver: Rc<dyn TickDriver>,
    pub(crate) defaults: TransitionConfig,
    slots: RefCell<HashMap<TargetKey, Transition>>,
}

impl SchedulerCore {
    fn new(driver: Rc<dyn TickDriver>, defaults: TransitionConfig) -> Self {
        Self {
            driver,
            defaults,
            slots: RefCell::new(HashMap::new()),
        }
    }

    /// Point the target's slot at `transition`, returning the displaced
    /// occupant if there was one.
    pub(crate) fn claim_slot(&self, transition: &Transition) -> Option<Transition> {
        self.slots
            .borrow_mut()
            .insert(target_key(transition.target()), transition.clone())
    }

    /// Clear the target's slot, but only if `transition` is still the
    /// occupant: a superseded transition's final tick must not evict its
    /// successor.
    pub(crate) fn release_slot(&self, transition: &Transition) {
        let key = target_key(transition.target());
        let mut slots = self.slots.borrow_mut();
        if slots.get(&key).map_or(false, |current| current.same(transition)) {
            slots.remove(&key);
        }
    }

    pub(crate) fn slot(&self, key: TargetKey) -> Option<Transition> {
        self.slots.borrow().get(&key).cloned()
    }
}

/// Factory for transitions bound to targets.
pub struct Tweener {
    core: Rc<SchedulerCore>,
}

impl Tweener {
    /// Build a tweener over an injected driver with the stock defaults
    /// (no delay, 400 ms duration).
    pub fn new(driver: Rc<dyn TickDriver>) -> Self {
        Self::with_defaults(driver, TransitionConfig::default())
    }

    /// Build a tweener with scheduler-wide default timing.
    pub fn with_defaults(driver: Rc<dyn TickDriver>, defaults: TransitionConfig) -> Self {
        Self {
            core: Rc::new(SchedulerCore::new(driver, defaults)),
        }
    }

    /// Deterministic mode: transitions run to completion synchronously via
    /// [`SyncDriver`] when started, and implicit (debounced) scheduling is
    /// disabled.
    pub fn deterministic() -> Self {
        Self::new(Rc::new(SyncDriver::new()))
    }

    /// Deterministic mode with an explicit iteration ceiling.
    pub fn deterministic_with_ceiling(ceiling: usize) -> Self {
        Self::new(Rc::new(SyncDriver::with_ceiling(ceiling)))
    }

    /// Obtain a fresh transition bound to `target`, seeded with the
    /// scheduler defaults.
    pub fn transition(&self, target: &TargetHandle) -> Transition {
        self.transition_with(target, self.core.defaults)
    }

    /// Obtain a fresh transition with an initial configuration override.
    pub fn transition_with(&self, target: &TargetHandle, config: TransitionConfig) -> Transition {
        Transition::new(self.core.clone(), target.clone(), config)
    }

    /// The transition currently animating `target`, if any.
    pub fn active_transition(&self, target: &TargetHandle) -> Option<Transition> {
        self.core.slot(target_key(target))
    }
}
