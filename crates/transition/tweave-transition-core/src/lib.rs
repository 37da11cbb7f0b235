//! Tweave Transition Core (engine-agnostic)
//!
//! A property-tweening scheduler: a [`Transition`] captures one or more
//! property mutations against a target, then drives interpolated
//! intermediate values into the target tick by tick through an injected
//! [`TickDriver`]. Multiple `set` calls issued in one synchronous burst
//! coalesce into a single tick sequence; starting a new transition on a
//! target supersedes the one currently animating it; [`ArrayTransition`]
//! fans a single tween out across every element of a target-held
//! collection.

pub mod config;
pub mod debounce;
pub mod driver;
pub mod easing;
pub mod fanout;
pub mod interp;
mod record;
pub mod scheduler;
pub mod transition;

// Re-exports for consumers (adapters)
pub use config::TransitionConfig;
pub use debounce::DebounceSlot;
pub use driver::{
    DeferredJob, FrameDriver, SyncDriver, TickDriver, TickFn, DEFAULT_ITERATION_CEILING,
};
pub use easing::{ease, ease_with, Easer, DEFAULT_EASING};
pub use fanout::ArrayTransition;
pub use interp::{interpolate, Interpolator};
pub use scheduler::Tweener;
pub use transition::Transition;
pub use tweave_api_core::{Target, TargetHandle, TweenError, Value, ValueKind};
