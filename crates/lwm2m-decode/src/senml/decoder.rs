//! Flattened entry-list to resource-tree builder.
//!
//! The payload is a SenML-like shape: `{ bn?: "/1/0", e: [{ n: "5", v: 21.5 },
//! ...] }`. Every entry names a target relative to the base path and carries
//! exactly one value field. The builder branches its assembly on the depth
//! class of the base path and is best-effort throughout: entries that do not
//! resolve are skipped, and the first entry to reach a slot wins.

use lwm2m_path::{classify, id_components, parse_id, split_path, PathClass, ResourceRegistry};
use serde_json::{Map, Value};

use super::error::SenmlDecodeError;
use crate::values::{
    InstanceTree, ObjectTree, ResourceInstances, ResourceNode, ResourceTree, ResourceValue,
};

/// Rebuilds the nested [`ResourceTree`] from a flattened entry list.
///
/// `base_path` overrides the payload's own `bn` field when present. The
/// tree depth matches the classified depth of the effective path; a
/// resource-level payload without instance ids collapses to a bare
/// scalar node.
///
/// # Errors
///
/// Fails only on structural problems: no effective path, a path that
/// does not classify, or a missing `e` list. Per-entry problems never
/// fail the decode — those entries are dropped.
pub fn decode_senml(
    base_path: Option<&str>,
    payload: &Value,
    registry: &dyn ResourceRegistry,
) -> Result<ResourceTree, SenmlDecodeError> {
    let root = payload.as_object().ok_or(SenmlDecodeError::MissingEntries)?;

    let path = base_path
        .map(str::to_owned)
        .or_else(|| root.get("bn").and_then(Value::as_str).map(str::to_owned))
        .ok_or(SenmlDecodeError::MissingBasePath)?;
    let class = classify(&path).map_err(|_| SenmlDecodeError::UnresolvedPath)?;
    let ids = id_components(&path).map_err(|_| SenmlDecodeError::UnresolvedPath)?;

    let entries = root
        .get("e")
        .and_then(Value::as_array)
        .ok_or(SenmlDecodeError::MissingEntries)?;

    Ok(match class {
        PathClass::Object => ResourceTree::Object(build_object_tree(entries, ids.oid, registry)),
        PathClass::Instance => {
            ResourceTree::Instance(build_instance_tree(entries, ids.oid, registry))
        }
        PathClass::Resource => ResourceTree::Resource(build_resource_node(entries)),
    })
}

/// Object-level assembly: entry names are `iid/ridOrName[/riid]`.
fn build_object_tree(
    entries: &[Value],
    oid: u16,
    registry: &dyn ResourceRegistry,
) -> ObjectTree {
    let mut tree = ObjectTree::new();
    for entry in entries {
        let Some(record) = entry.as_object() else { continue };
        let Some(value) = record_value(record) else { continue };
        let segments = split_path(record_name(record));
        let Some(iid) = segments.first().and_then(|s| parse_id(s)) else {
            continue;
        };
        let Some(rid) = segments
            .get(1)
            .and_then(|s| registry.resolve_resource_id(oid, s))
        else {
            continue;
        };
        let Some(node) = leaf_node(segments.get(2).copied(), value) else {
            continue;
        };
        // The instance map materializes on the first resource written to it
        tree.entry(iid).or_default().entry(rid).or_insert(node);
    }
    tree
}

/// Instance-level assembly: entry names are `ridOrName[/riid]`.
fn build_instance_tree(
    entries: &[Value],
    oid: u16,
    registry: &dyn ResourceRegistry,
) -> InstanceTree {
    let mut tree = InstanceTree::new();
    for entry in entries {
        let Some(record) = entry.as_object() else { continue };
        let Some(value) = record_value(record) else { continue };
        let segments = split_path(record_name(record));
        let Some(rid) = segments
            .first()
            .and_then(|s| registry.resolve_resource_id(oid, s))
        else {
            continue;
        };
        let Some(node) = leaf_node(segments.get(1).copied(), value) else {
            continue;
        };
        tree.entry(rid).or_insert(node);
    }
    tree
}

/// Resource-level assembly: the whole entry name, unsplit, is the
/// resource-instance id. Entries without a name write the bare scalar
/// slot; each one overwrites it. A named entry never displaces a scalar
/// already in place, and duplicates under a collection are skipped.
fn build_resource_node(entries: &[Value]) -> ResourceNode {
    let mut node = ResourceNode::Multi(ResourceInstances::new());
    for entry in entries {
        let Some(record) = entry.as_object() else { continue };
        let Some(value) = record_value(record) else { continue };
        match record.get("n").and_then(Value::as_str).filter(|n| !n.is_empty()) {
            None => node = ResourceNode::Single(value),
            Some(name) => {
                let Some(riid) = parse_id(name) else { continue };
                if let ResourceNode::Multi(instances) = &mut node {
                    instances.entry(riid).or_insert(value);
                }
            }
        }
    }
    node
}

/// Resolves an entry's value by field precedence: `v`, then `sv`, then
/// `bv`, then `ov`. The first field present decides the variant; a
/// present field of the wrong JSON type resolves to `None` and the
/// entry is skipped.
fn record_value(record: &Map<String, Value>) -> Option<ResourceValue> {
    if let Some(v) = record.get("v") {
        return v.as_f64().map(ResourceValue::Numeric);
    }
    if let Some(sv) = record.get("sv") {
        return sv.as_str().map(|s| ResourceValue::Str(s.to_string()));
    }
    if let Some(bv) = record.get("bv") {
        return bv.as_bool().map(ResourceValue::Bool);
    }
    record.get("ov").map(|ov| ResourceValue::ObjectLink(ov.clone()))
}

fn record_name(record: &Map<String, Value>) -> &str {
    record.get("n").and_then(Value::as_str).unwrap_or("")
}

/// Builds the node for one entry: a fresh single-entry collection when a
/// resource-instance segment is present, a bare value otherwise.
fn leaf_node(riid: Option<&str>, value: ResourceValue) -> Option<ResourceNode> {
    match riid {
        Some(segment) => {
            let riid = parse_id(segment)?;
            let mut instances = ResourceInstances::new();
            instances.insert(riid, value);
            Some(ResourceNode::Multi(instances))
        }
        None => Some(ResourceNode::Single(value)),
    }
}
