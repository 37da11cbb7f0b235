//! One scheduled property mutation.

use std::fmt;

use tweave_api_core::{TargetHandle, TweenError, Value};

use crate::interp::{interpolate, Interpolator};

/// Snapshot of a single `set` call: the mutation site, the endpoint pair
/// frozen at call time, and the interpolator bound over it. The record
/// never re-reads the target: a property changing between capture and
/// execution does not move the endpoints.
pub(crate) struct SetRecord {
    pub target: TargetHandle,
    pub key: String,
    pub old_value: Value,
    pub new_value: Value,
    pub interpolator: Interpolator,
}

impl SetRecord {
    /// Capture a record against `target`: read the old value, resolve the
    /// new one exactly once, bind the interpolator. Both the scalar `set`
    /// path and array fan-out funnel through here.
    pub fn capture(
        target: &TargetHandle,
        key: &str,
        resolve: impl FnOnce(&Value) -> Value,
    ) -> Result<Self, TweenError> {
        let old_value = target
            .borrow()
            .get(key)
            .ok_or_else(|| TweenError::MissingProperty {
                key: key.to_string(),
            })?;
        let new_value = resolve(&old_value);
        let interpolator = interpolate(&old_value, &new_value);
        Ok(Self {
            target: target.clone(),
            key: key.to_string(),
            old_value,
            new_value,
            interpolator,
        })
    }

    /// Write the interpolated value at progress `t` back into the target.
    pub fn apply(&self, t: f32) {
        let value = (self.interpolator)(t);
        self.target.borrow_mut().set(&self.key, value);
    }
}

impl fmt::Debug for SetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetRecord")
            .field("key", &self.key)
            .field("old_value", &self.old_value)
            .field("new_value", &self.new_value)
            .finish()
    }
}
