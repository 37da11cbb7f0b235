//! Target capability trait.
//!
//! The engine animates any host object that can get/set properties by key.
//! Hosts that hold child collections additionally expose `items` so the
//! engine can fan a tween out across every element. Handles are shared,
//! non-owning references: the engine never controls a target's lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Value;

/// Shared handle to an animatable host object.
pub type TargetHandle = Rc<RefCell<dyn Target>>;

/// Property get/set protocol the engine requires from a host object.
pub trait Target {
    /// Read the current value of a property, or `None` when the target has
    /// no such property.
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a property value.
    fn set(&mut self, key: &str, value: Value);

    /// Enumerate a child collection held under `key`, in index order.
    /// Targets without collections keep the default.
    fn items(&self, _key: &str) -> Option<Vec<TargetHandle>> {
        None
    }
}
