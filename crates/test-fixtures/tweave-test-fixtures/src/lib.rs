//! In-memory target fixtures for the Tweave test suites.
//!
//! `Node` is a plain property-bag target with optional child collections;
//! `Probe` additionally records every write it receives so tests can assert
//! on tick counts and ordering. `from_json` builds a `Node` tree from a
//! JSON object literal.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{anyhow, bail, Context, Result};
use tweave_api_core::{coercion, Target, TargetHandle, Value};

/// Map-backed animatable object.
#[derive(Default)]
pub struct Node {
    props: HashMap<String, Value>,
    collections: HashMap<String, Vec<TargetHandle>>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_props(props: &[(&str, Value)]) -> Self {
        let mut node = Self::new();
        for (key, value) in props {
            node.insert(key, value.clone());
        }
        node
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.props.insert(key.to_string(), value);
    }

    pub fn push_item(&mut self, key: &str, item: TargetHandle) {
        self.collections.entry(key.to_string()).or_default().push(item);
    }

    pub fn into_handle(self) -> TargetHandle {
        Rc::new(RefCell::new(self))
    }
}

impl Target for Node {
    fn get(&self, key: &str) -> Option<Value> {
        self.props.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.props.insert(key.to_string(), value);
    }

    fn items(&self, key: &str) -> Option<Vec<TargetHandle>> {
        self.collections.get(key).cloned()
    }
}

/// Shorthand: a property-bag handle.
pub fn node(props: &[(&str, Value)]) -> TargetHandle {
    Node::with_props(props).into_handle()
}

/// Read a property as f32, panicking when absent. Test helper.
pub fn number(handle: &TargetHandle, key: &str) -> f32 {
    let value = handle
        .borrow()
        .get(key)
        .unwrap_or_else(|| panic!("fixture property '{key}' should exist"));
    coercion::to_float(&value)
}

/// Target that records every write it receives, in order.
#[derive(Default)]
pub struct Probe {
    values: HashMap<String, Value>,
    pub writes: Vec<(String, Value)>,
}

impl Probe {
    pub fn new(props: &[(&str, Value)]) -> Self {
        let mut probe = Self::default();
        for (key, value) in props {
            probe.values.insert(key.to_string(), value.clone());
        }
        probe
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    pub fn last_write(&self) -> Option<&(String, Value)> {
        self.writes.last()
    }
}

impl Target for Probe {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.writes.push((key.to_string(), value.clone()));
        self.values.insert(key.to_string(), value);
    }
}

/// Build a `Node` tree from a JSON object literal. Numbers become `Float`,
/// numeric arrays become `Vector`, arrays of objects become child
/// collections.
pub fn from_json(raw: &str) -> Result<TargetHandle> {
    let parsed: serde_json::Value =
        serde_json::from_str(raw).context("failed to parse fixture JSON")?;
    Ok(build_node(&parsed)?.into_handle())
}

fn build_node(value: &serde_json::Value) -> Result<Node> {
    let object = value
        .as_object()
        .ok_or_else(|| anyhow!("fixture value must be a JSON object, got {value}"))?;

    let mut node = Node::new();
    for (key, entry) in object {
        match entry {
            serde_json::Value::Number(n) => {
                node.insert(key, Value::Float(n.as_f64().unwrap_or(0.0) as f32));
            }
            serde_json::Value::Bool(b) => node.insert(key, Value::Bool(*b)),
            serde_json::Value::String(s) => node.insert(key, Value::Text(s.clone())),
            serde_json::Value::Array(items) if items.iter().all(|i| i.is_object()) && !items.is_empty() => {
                for item in items {
                    node.push_item(key, build_node(item)?.into_handle());
                }
            }
            serde_json::Value::Array(items) => {
                let components: Vec<f32> = items
                    .iter()
                    .map(|i| {
                        i.as_f64()
                            .map(|f| f as f32)
                            .ok_or_else(|| anyhow!("array fixture '{key}' mixes kinds"))
                    })
                    .collect::<Result<_>>()?;
                node.insert(key, Value::Vector(components));
            }
            other => bail!("unsupported fixture value for '{key}': {other}"),
        }
    }
    Ok(node)
}
