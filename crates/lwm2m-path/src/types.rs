//! Type definitions for LWM2M paths.

/// Depth class of a path within the Object/Instance/Resource hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// One segment: addresses an object, e.g. `/1`.
    Object,
    /// Two segments: addresses an object instance, e.g. `/1/0`.
    Instance,
    /// Three segments: addresses a resource, e.g. `/1/0/5`.
    Resource,
}

/// Numeric id components extracted from a path.
///
/// `iid` and `rid` are present only when the path reaches their depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathIds {
    /// Object id.
    pub oid: u16,
    /// Object-instance id.
    pub iid: Option<u16>,
    /// Resource id.
    pub rid: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_ids_shape() {
        let ids = PathIds {
            oid: 3,
            iid: Some(0),
            rid: None,
        };
        assert_eq!(ids.oid, 3);
        assert_eq!(ids.iid, Some(0));
        assert!(ids.rid.is_none());
    }
}
