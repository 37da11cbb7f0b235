//! Transition lifecycle: capture, coalesce, supersede, tick.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tweave_api_core::{TargetHandle, TweenError, Value};

use crate::config::TransitionConfig;
use crate::debounce::DebounceSlot;
use crate::easing::{self, Easer};
use crate::fanout::ArrayTransition;
use crate::record::SetRecord;
use crate::scheduler::{target_key, SchedulerCore};

/// One scheduled animation against a single target.
///
/// A transition accumulates [`set`](Transition::set) calls into an ordered
/// record list, then drives all of them through one tick sequence. Handles
/// are cheap clones over shared state, so a caller can keep one around to
/// [`stop`](Transition::stop) the animation later.
///
/// Lifecycle: pending (records accumulate, execution debounced) → active
/// (occupying the target's slot, ticking) → terminal (completed or killed;
/// never ticked or reused again).
pub struct Transition {
    inner: Rc<TransitionInner>,
}

impl Clone for Transition {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct TransitionInner {
    scheduler: Rc<SchedulerCore>,
    target: TargetHandle,
    sets: RefCell<Vec<SetRecord>>,
    config: Cell<TransitionConfig>,
    easer: RefCell<Option<Easer>>,
    killed: Cell<bool>,
    pending: DebounceSlot,
}

impl Transition {
    pub(crate) fn new(
        scheduler: Rc<SchedulerCore>,
        target: TargetHandle,
        config: TransitionConfig,
    ) -> Self {
        Self {
            inner: Rc::new(TransitionInner {
                scheduler,
                target,
                sets: RefCell::new(Vec::new()),
                config: Cell::new(config),
                easer: RefCell::new(None),
                killed: Cell::new(false),
                pending: DebounceSlot::new(),
            }),
        }
    }

    /// Milliseconds to wait before the first tick. Chainable; validated
    /// when the tick sequence starts.
    pub fn delay(&self, delay_ms: f64) -> &Self {
        let mut config = self.inner.config.get();
        config.delay_ms = delay_ms;
        self.inner.config.set(config);
        self
    }

    /// Milliseconds from first tick to completion. Chainable; validated
    /// when the tick sequence starts.
    pub fn duration(&self, duration_ms: f64) -> &Self {
        let mut config = self.inner.config.get();
        config.duration_ms = duration_ms;
        self.inner.config.set(config);
        self
    }

    /// Replace the progress curve with a named easing (default parameters).
    /// An empty name resolves to [`easing::DEFAULT_EASING`]. Without any
    /// `ease` call, the raw completion ratio is used (linear, unclamped).
    pub fn ease(&self, name: &str) -> Result<&Self, TweenError> {
        *self.inner.easer.borrow_mut() = Some(easing::ease(name)?);
        Ok(self)
    }

    /// Replace the progress curve with a named easing and explicit curve
    /// parameters.
    pub fn ease_with(&self, name: &str, a: f32, b: f32) -> Result<&Self, TweenError> {
        *self.inner.easer.borrow_mut() = Some(easing::ease_with(name, a, b)?);
        Ok(self)
    }

    /// Schedule a property mutation towards a literal value. The old value
    /// is snapshotted now; repeated calls (any keys, duplicates included)
    /// accumulate into one tick sequence.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<&Self, TweenError> {
        let value = value.into();
        self.push_record(&self.inner.target, key, move |_| value)?;
        self.schedule_execute();
        Ok(self)
    }

    /// Schedule a property mutation whose destination is computed from the
    /// current value. The closure runs exactly once, immediately; its
    /// result is frozen as the destination.
    pub fn set_with(
        &self,
        key: &str,
        value: impl FnOnce(&Value) -> Value,
    ) -> Result<&Self, TweenError> {
        self.push_record(&self.inner.target, key, value)?;
        self.schedule_execute();
        Ok(self)
    }

    /// Fan-out adapter over the collection held under `collection_key`.
    /// Nothing is scheduled until `set` is called on the adapter.
    pub fn each(&self, collection_key: &str) -> ArrayTransition {
        ArrayTransition::new(self.clone(), collection_key)
    }

    /// Cooperative cancellation: marks the transition terminal and cancels
    /// any pending deferred start. An in-flight tick sequence observes the
    /// flag on its next tick, so at most one further write per record can
    /// land. Idempotent.
    pub fn stop(&self) {
        self.inner.killed.set(true);
        self.inner.pending.cancel();
    }

    /// True once the transition is terminal (completed or killed).
    pub fn is_stopped(&self) -> bool {
        self.inner.killed.get()
    }

    /// True while this transition occupies its target's active slot.
    pub fn is_active(&self) -> bool {
        self.inner
            .scheduler
            .slot(target_key(&self.inner.target))
            .map_or(false, |current| current.same(self))
    }

    /// Number of records scheduled so far.
    pub fn set_count(&self) -> usize {
        self.inner.sets.borrow().len()
    }

    /// Start the tick sequence now: validate the configuration, supersede
    /// whichever transition currently animates the target, claim its slot
    /// and hand the per-tick callback to the driver.
    ///
    /// In deterministic mode this is the explicit entry point (implicit
    /// scheduling is disabled there) and returns once the run completes.
    pub fn run(&self) -> Result<(), TweenError> {
        if self.inner.killed.get() {
            return Err(TweenError::AlreadyStopped);
        }
        let config = self.inner.config.get();
        config.validate()?;

        if let Some(previous) = self.inner.scheduler.claim_slot(self) {
            if !previous.same(self) {
                log::debug!(
                    "superseding active transition on target {:p}",
                    Rc::as_ptr(&self.inner.target)
                );
                previous.stop();
            }
        }

        let this = self.clone();
        self.inner
            .scheduler
            .driver
            .start(Box::new(move |elapsed| this.tick(elapsed)), config.delay_ms);
        Ok(())
    }

    /// Append one record. Fan-out passes element targets; the scalar path
    /// passes the transition's own target.
    pub(crate) fn push_record(
        &self,
        target: &TargetHandle,
        key: &str,
        resolve: impl FnOnce(&Value) -> Value,
    ) -> Result<(), TweenError> {
        if self.inner.killed.get() {
            return Err(TweenError::AlreadyStopped);
        }
        let record = SetRecord::capture(target, key, resolve)?;
        log::trace!("scheduling {record:?}");
        self.inner.sets.borrow_mut().push(record);
        Ok(())
    }

    /// Debounced execution trigger: any burst of `set` calls collapses to
    /// one deferred `run`. Failures on this implicit path are logged, not
    /// surfaced; there is no caller to hand them to.
    pub(crate) fn schedule_execute(&self) {
        let this = self.clone();
        let driver = self.inner.scheduler.driver.clone();
        self.inner.pending.schedule(&*driver, move || {
            if let Err(error) = this.run() {
                match error {
                    TweenError::AlreadyStopped => {
                        log::debug!("skipping deferred start of a stopped transition")
                    }
                    error => log::warn!("deferred transition start failed: {error}"),
                }
            }
        });
    }

    /// Per-tick state machine. Applies every record in insertion order,
    /// including on the terminating tick, then checks completion and the
    /// kill flag. Terminal ticks release the slot (occupant-guarded) and
    /// tell the driver to stop.
    fn tick(&self, elapsed_ms: f64) -> bool {
        let config = self.inner.config.get();
        let completion = (elapsed_ms / config.duration_ms) as f32;
        let t = match &*self.inner.easer.borrow() {
            Some(easer) => easer(completion),
            None => completion,
        };
        for record in self.inner.sets.borrow().iter() {
            record.apply(t);
        }
        if completion >= 1.0 || self.inner.killed.get() {
            self.inner.killed.set(true);
            self.inner.scheduler.release_slot(self);
            return true;
        }
        false
    }

    pub(crate) fn target(&self) -> &TargetHandle {
        &self.inner.target
    }

    pub(crate) fn same(&self, other: &Transition) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("config", &self.inner.config.get())
            .field("sets", &self.inner.sets.borrow())
            .field("killed", &self.inner.killed.get())
            .finish()
    }
}
