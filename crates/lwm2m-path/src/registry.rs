//! Resource-id alias resolution.
//!
//! SenML-like payloads may name a resource either by its decimal id or by
//! a registered name (`"5700"` vs `"sensorValue"`). Resolution is an
//! explicit, read-only input to the decoders — implement
//! [`ResourceRegistry`] to supply an object model, or use
//! [`NumericRegistry`] when only decimal ids occur.

use std::collections::BTreeMap;

use crate::parse_id;

/// Resolves a resource name or decimal id to its canonical resource id.
pub trait ResourceRegistry {
    /// Returns the canonical resource id under object `oid`, or `None`
    /// when `rid_or_name` is neither a decimal id nor a known name.
    ///
    /// A resolved id of `0` is a valid id, not a failure.
    fn resolve_resource_id(&self, oid: u16, rid_or_name: &str) -> Option<u16>;
}

/// Registry that resolves decimal ids only.
///
/// # Example
///
/// ```
/// use lwm2m_path::{NumericRegistry, ResourceRegistry};
///
/// assert_eq!(NumericRegistry.resolve_resource_id(1, "5"), Some(5));
/// assert_eq!(NumericRegistry.resolve_resource_id(1, "sensorValue"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericRegistry;

impl ResourceRegistry for NumericRegistry {
    fn resolve_resource_id(&self, _oid: u16, rid_or_name: &str) -> Option<u16> {
        parse_id(rid_or_name)
    }
}

/// Registry backed by an `(object id, name) → resource id` table.
///
/// Decimal ids resolve without consulting the table, so the table only
/// needs the name aliases.
///
/// # Example
///
/// ```
/// use lwm2m_path::{ResourceRegistry, TableRegistry};
///
/// let mut registry = TableRegistry::new();
/// registry.insert(3303, "sensorValue", 5700);
///
/// assert_eq!(registry.resolve_resource_id(3303, "sensorValue"), Some(5700));
/// assert_eq!(registry.resolve_resource_id(3303, "5700"), Some(5700));
/// assert_eq!(registry.resolve_resource_id(3304, "sensorValue"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    names: BTreeMap<(u16, String), u16>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as an alias for resource `rid` under object `oid`.
    pub fn insert(&mut self, oid: u16, name: impl Into<String>, rid: u16) {
        self.names.insert((oid, name.into()), rid);
    }
}

impl ResourceRegistry for TableRegistry {
    fn resolve_resource_id(&self, oid: u16, rid_or_name: &str) -> Option<u16> {
        parse_id(rid_or_name)
            .or_else(|| self.names.get(&(oid, rid_or_name.to_string())).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_registry() {
        assert_eq!(NumericRegistry.resolve_resource_id(1, "0"), Some(0));
        assert_eq!(NumericRegistry.resolve_resource_id(1, "5700"), Some(5700));
        assert_eq!(NumericRegistry.resolve_resource_id(1, "name"), None);
        assert_eq!(NumericRegistry.resolve_resource_id(1, ""), None);
    }

    #[test]
    fn test_table_registry_names_are_scoped_by_object() {
        let mut registry = TableRegistry::new();
        registry.insert(3303, "sensorValue", 5700);
        registry.insert(3303, "units", 5701);
        registry.insert(3304, "sensorValue", 5700);

        assert_eq!(registry.resolve_resource_id(3303, "sensorValue"), Some(5700));
        assert_eq!(registry.resolve_resource_id(3303, "units"), Some(5701));
        assert_eq!(registry.resolve_resource_id(3304, "units"), None);
    }

    #[test]
    fn test_table_registry_numeric_passthrough() {
        let registry = TableRegistry::new();
        assert_eq!(registry.resolve_resource_id(1, "7"), Some(7));
        // Id 0 resolves; zero is not a failure sentinel
        assert_eq!(registry.resolve_resource_id(1, "0"), Some(0));
    }
}
