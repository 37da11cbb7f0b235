//! Single-slot debounce primitive.
//!
//! A slot admits at most one live deferred job: scheduling bumps a shared
//! generation counter and tags the queued job with it, so any job queued by
//! an earlier `schedule` finds itself stale when it finally runs and does
//! nothing. Used to coalesce a synchronous burst of `set` calls into one
//! execution.

use std::cell::Cell;
use std::rc::Rc;

use crate::driver::TickDriver;

#[derive(Default)]
pub struct DebounceSlot {
    generation: Rc<Cell<u64>>,
}

impl DebounceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `job` through the driver, invalidating any job this slot
    /// queued earlier.
    pub fn schedule(&self, driver: &dyn TickDriver, job: impl FnOnce() + 'static) {
        let generation = self.generation.clone();
        let scheduled = generation.get().wrapping_add(1);
        generation.set(scheduled);
        driver.defer(Box::new(move || {
            if generation.get() == scheduled {
                job();
            }
        }));
    }

    /// Invalidate the pending job, if any, without queueing a new one.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}
