//! Tick drivers.
//!
//! A driver owns two scheduling primitives the engine depends on:
//! deferred jobs (run once, after the current synchronous burst of caller
//! code) and repeating timers (invoke a callback with elapsed milliseconds
//! until it returns true). The driver is injected into the [`crate::Tweener`]
//! at construction; tests inject [`SyncDriver`] for deterministic,
//! no-real-time runs.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Repeating tick callback. Receives milliseconds elapsed since the timer
/// began (after its delay); returning true stops further invocation.
pub type TickFn = Box<dyn FnMut(f64) -> bool>;

/// One-shot deferred job.
pub type DeferredJob = Box<dyn FnOnce()>;

/// Scheduling capabilities the engine requires.
pub trait TickDriver {
    /// Queue a job to run after the current synchronous burst completes and
    /// before any work queued later.
    fn defer(&self, job: DeferredJob);

    /// After `delay_ms`, repeatedly invoke `tick` with elapsed milliseconds
    /// until it returns true.
    fn start(&self, tick: TickFn, delay_ms: f64);
}

struct FrameTimer {
    tick: TickFn,
    begins_at: f64,
}

/// Host-pumped real-time driver.
///
/// The embedding environment owns the cadence: it calls [`FrameDriver::advance`]
/// once per frame with its clock reading in milliseconds. Each advance first
/// drains the deferred-job queue in FIFO order (jobs queued by other jobs
/// drain in the same frame), then ticks every due timer once with
/// `elapsed = now - (start + delay)`.
#[derive(Default)]
pub struct FrameDriver {
    now: Cell<f64>,
    deferred: RefCell<VecDeque<DeferredJob>>,
    timers: RefCell<Vec<FrameTimer>>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The clock reading of the most recent `advance`.
    pub fn now_ms(&self) -> f64 {
        self.now.get()
    }

    /// True when no deferred jobs and no live timers remain.
    pub fn is_idle(&self) -> bool {
        self.deferred.borrow().is_empty() && self.timers.borrow().is_empty()
    }

    /// Run one frame at clock reading `now_ms` (expected monotonic).
    pub fn advance(&self, now_ms: f64) {
        self.now.set(now_ms);

        // Jobs may enqueue further jobs or start timers; pop one at a time
        // so the queue borrow is never held across a job.
        loop {
            let job = self.deferred.borrow_mut().pop_front();
            match job {
                Some(job) => job(),
                None => break,
            }
        }

        // Timers registered while ticking land in the freshly emptied slot
        // and first tick on the next advance.
        let mut running = self.timers.take();
        running.retain_mut(|timer| {
            if now_ms < timer.begins_at {
                return true;
            }
            let elapsed = now_ms - timer.begins_at;
            !(timer.tick)(elapsed)
        });
        let fresh = self.timers.take();
        running.extend(fresh);
        self.timers.replace(running);
    }
}

impl TickDriver for FrameDriver {
    fn defer(&self, job: DeferredJob) {
        self.deferred.borrow_mut().push_back(job);
    }

    fn start(&self, tick: TickFn, delay_ms: f64) {
        let begins_at = self.now.get() + delay_ms.max(0.0);
        self.timers.borrow_mut().push(FrameTimer { tick, begins_at });
    }
}

/// Iteration cutoff for [`SyncDriver`] runs that never report completion.
pub const DEFAULT_ITERATION_CEILING: usize = 100_000;

/// Deterministic test driver: runs a started timer to completion
/// synchronously with `elapsed = 1, 2, 3, …` integer milliseconds, up to an
/// iteration ceiling. Deferred jobs are dropped; deterministic tests start
/// tick sequences explicitly instead of relying on implicit scheduling.
pub struct SyncDriver {
    ceiling: usize,
}

impl SyncDriver {
    pub fn new() -> Self {
        Self::with_ceiling(DEFAULT_ITERATION_CEILING)
    }

    pub fn with_ceiling(ceiling: usize) -> Self {
        Self { ceiling }
    }
}

impl Default for SyncDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TickDriver for SyncDriver {
    fn defer(&self, _job: DeferredJob) {}

    fn start(&self, mut tick: TickFn, _delay_ms: f64) {
        for elapsed in 1..=self.ceiling {
            if tick(elapsed as f64) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn sync_driver_counts_to_completion() {
        let driver = SyncDriver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        driver.start(
            Box::new(move |elapsed| {
                log.borrow_mut().push(elapsed);
                elapsed >= 3.0
            }),
            0.0,
        );
        assert_eq!(&*seen.borrow(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn sync_driver_stops_at_ceiling() {
        let driver = SyncDriver::with_ceiling(5);
        let count = Rc::new(Cell::new(0usize));
        let seen = count.clone();
        driver.start(
            Box::new(move |_| {
                seen.set(seen.get() + 1);
                false
            }),
            0.0,
        );
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn frame_driver_honors_delay() {
        let driver = FrameDriver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        driver.start(
            Box::new(move |elapsed| {
                log.borrow_mut().push(elapsed);
                false
            }),
            50.0,
        );
        driver.advance(40.0);
        assert!(seen.borrow().is_empty());
        driver.advance(60.0);
        assert_eq!(&*seen.borrow(), &[10.0]);
    }

    #[test]
    fn frame_driver_drains_deferred_before_timers() {
        let driver = Rc::new(FrameDriver::new());
        let order = Rc::new(RefCell::new(Vec::new()));

        let log = order.clone();
        driver.start(
            Box::new(move |_| {
                log.borrow_mut().push("tick");
                true
            }),
            0.0,
        );
        let log = order.clone();
        driver.defer(Box::new(move || log.borrow_mut().push("deferred")));

        driver.advance(0.0);
        assert_eq!(&*order.borrow(), &["deferred", "tick"]);
        assert!(driver.is_idle());
    }

    #[test]
    fn frame_driver_never_reinvokes_a_finished_timer() {
        let driver = FrameDriver::new();
        let count = Rc::new(Cell::new(0usize));
        let seen = count.clone();
        driver.start(
            Box::new(move |_| {
                seen.set(seen.get() + 1);
                true
            }),
            0.0,
        );
        driver.advance(0.0);
        driver.advance(16.0);
        driver.advance(32.0);
        assert_eq!(count.get(), 1);
    }
}
