//! Array fan-out: one `set`, one record per collection element.

use std::fmt;

use tweave_api_core::{TargetHandle, TweenError, Value};

use crate::transition::Transition;

/// Fan-out adapter produced by [`Transition::each`].
///
/// Holds no data of its own: the collection is re-read from the target at
/// `set` time, so elements appended between `each` and `set` are included.
/// All scheduling is delegated to the wrapped transition: a fan-out `set`
/// triggers exactly one (debounced) execution after the full expansion, and
/// every element animates in lock-step within the one tick sequence.
pub struct ArrayTransition {
    transition: Transition,
    collection_key: String,
}

impl ArrayTransition {
    pub(crate) fn new(transition: Transition, collection_key: &str) -> Self {
        Self {
            transition,
            collection_key: collection_key.to_string(),
        }
    }

    /// Proxy to [`Transition::delay`].
    pub fn delay(&self, delay_ms: f64) -> &Self {
        self.transition.delay(delay_ms);
        self
    }

    /// Proxy to [`Transition::duration`].
    pub fn duration(&self, duration_ms: f64) -> &Self {
        self.transition.duration(duration_ms);
        self
    }

    /// Proxy to [`Transition::ease`].
    pub fn ease(&self, name: &str) -> Result<&Self, TweenError> {
        self.transition.ease(name)?;
        Ok(self)
    }

    /// Proxy to [`Transition::ease_with`].
    pub fn ease_with(&self, name: &str, a: f32, b: f32) -> Result<&Self, TweenError> {
        self.transition.ease_with(name, a, b)?;
        Ok(self)
    }

    /// Schedule `key` on every element towards one literal value.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<&Self, TweenError> {
        let value = value.into();
        self.fan_out(key, move |_, _| value.clone())
    }

    /// Schedule `key` on every element towards a per-element value computed
    /// from the element handle and its index. Each closure result is frozen
    /// at call time.
    pub fn set_with(
        &self,
        key: &str,
        value: impl Fn(&TargetHandle, usize) -> Value,
    ) -> Result<&Self, TweenError> {
        self.fan_out(key, value)
    }

    /// The wrapped transition, for lifecycle control (`run`, `stop`).
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    fn fan_out(
        &self,
        key: &str,
        value: impl Fn(&TargetHandle, usize) -> Value,
    ) -> Result<&Self, TweenError> {
        let items = self
            .transition
            .target()
            .borrow()
            .items(&self.collection_key)
            .ok_or_else(|| TweenError::MissingCollection {
                key: self.collection_key.clone(),
            })?;

        for (index, element) in items.iter().enumerate() {
            let new_value = value(element, index);
            self.transition
                .push_record(element, key, move |_| new_value)?;
        }

        // One execution for the whole fan-out, not one per element.
        self.transition.schedule_execute();
        Ok(self)
    }
}

impl fmt::Debug for ArrayTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayTransition")
            .field("collection_key", &self.collection_key)
            .field("transition", &self.transition)
            .finish()
    }
}
