//! [`ResourceValue`] and the nested resource-tree model shared by the
//! payload decoders.

use std::collections::BTreeMap;

use serde_json::Value;

/// A single decoded resource value.
///
/// Payload entries carry exactly one value field (`v`, `sv`, `bv`, or
/// `ov`); each maps to one variant here. Object-link values are passed
/// through opaquely — their link semantics are resolved elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceValue {
    /// Numeric value (`v`)
    Numeric(f64),
    /// String value (`sv`)
    Str(String),
    /// Boolean value (`bv`)
    Bool(bool),
    /// Object link (`ov`), carried opaquely
    ObjectLink(Value),
}

/// Resource-instance ids mapped to their values (multi-instance resource).
pub type ResourceInstances = BTreeMap<u16, ResourceValue>;

/// A resource slot: either one bare value or an id-keyed collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceNode {
    /// Single-instance resource
    Single(ResourceValue),
    /// Multi-instance resource
    Multi(ResourceInstances),
}

/// Resource ids mapped to their slots within one object instance.
pub type InstanceTree = BTreeMap<u16, ResourceNode>;

/// Object-instance ids mapped to their instance trees.
pub type ObjectTree = BTreeMap<u16, InstanceTree>;

/// A decoded resource tree.
///
/// The nesting depth matches the depth class of the decoded target path:
/// an object-level payload yields the full instance-id → resource-id
/// nesting, a resource-level payload yields a bare slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceTree {
    Object(ObjectTree),
    Instance(InstanceTree),
    Resource(ResourceNode),
}

impl From<&ResourceValue> for Value {
    fn from(value: &ResourceValue) -> Self {
        match value {
            ResourceValue::Numeric(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            ResourceValue::Str(s) => Value::String(s.clone()),
            ResourceValue::Bool(b) => Value::Bool(*b),
            ResourceValue::ObjectLink(v) => v.clone(),
        }
    }
}

impl From<&ResourceNode> for Value {
    fn from(node: &ResourceNode) -> Self {
        match node {
            ResourceNode::Single(value) => Value::from(value),
            ResourceNode::Multi(instances) => keyed_map(instances, |v| Value::from(v)),
        }
    }
}

impl From<&ResourceTree> for Value {
    fn from(tree: &ResourceTree) -> Self {
        match tree {
            ResourceTree::Object(instances) => {
                keyed_map(instances, |resources| keyed_map(resources, |v| Value::from(v)))
            }
            ResourceTree::Instance(resources) => keyed_map(resources, |v| Value::from(v)),
            ResourceTree::Resource(node) => Value::from(node),
        }
    }
}

/// Renders a `u16`-keyed map as a JSON object with decimal string keys.
fn keyed_map<T>(map: &BTreeMap<u16, T>, to_value: impl Fn(&T) -> Value) -> Value {
    Value::Object(
        map.iter()
            .map(|(id, v)| (id.to_string(), to_value(v)))
            .collect(),
    )
}
