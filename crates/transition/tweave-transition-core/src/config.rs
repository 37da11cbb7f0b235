//! Timing configuration for transitions.

use serde::{Deserialize, Serialize};
use tweave_api_core::TweenError;

/// Default delay before a transition's first tick, in milliseconds.
pub const DEFAULT_DELAY_MS: f64 = 0.0;

/// Default transition duration in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 400.0;

/// Per-transition timing. Seeded from the scheduler defaults, overridable
/// per instance via the fluent `delay`/`duration` setters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Milliseconds to wait before the first tick.
    pub delay_ms: f64,
    /// Milliseconds from first tick to completion.
    pub duration_ms: f64,
}

impl TransitionConfig {
    pub fn new(delay_ms: f64, duration_ms: f64) -> Self {
        Self {
            delay_ms,
            duration_ms,
        }
    }

    /// Check the configuration is usable for tick arithmetic. The fluent
    /// setters accept anything; this runs when the tick sequence starts so
    /// a bad duration fails fast instead of propagating NaN into targets.
    pub fn validate(&self) -> Result<(), TweenError> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(TweenError::Configuration {
                reason: format!("duration must be a positive number of ms, got {}", self.duration_ms),
            });
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(TweenError::Configuration {
                reason: format!("delay must be a non-negative number of ms, got {}", self.delay_ms),
            });
        }
        Ok(())
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(TransitionConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_and_nan_duration() {
        assert!(TransitionConfig::new(0.0, 0.0).validate().is_err());
        assert!(TransitionConfig::new(0.0, -10.0).validate().is_err());
        assert!(TransitionConfig::new(0.0, f64::NAN).validate().is_err());
        assert!(TransitionConfig::new(-1.0, 100.0).validate().is_err());
    }
}
