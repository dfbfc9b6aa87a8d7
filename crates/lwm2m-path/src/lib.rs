//! LWM2M path utilities.
//!
//! This crate implements helpers for the Object/Instance/Resource path
//! hierarchy used by LWM2M-style device-management stacks. Paths such as
//! `/1/0/5` address, in order, an object (`1`), an object instance (`0`),
//! and a resource (`5`).
//!
//! # Example
//!
//! ```
//! use lwm2m_path::{classify, id_components, split_path, PathClass};
//!
//! // Split a path into segments
//! let segments = split_path("/1/0/5");
//! assert_eq!(segments, vec!["1", "0", "5"]);
//!
//! // Classify by depth
//! assert_eq!(classify("/1/0/5").unwrap(), PathClass::Resource);
//!
//! // Extract the numeric id components
//! let ids = id_components("/1/0/5").unwrap();
//! assert_eq!((ids.oid, ids.iid, ids.rid), (1, Some(0), Some(5)));
//! ```

use thiserror::Error;

pub mod registry;
pub mod types;

pub use registry::{NumericRegistry, ResourceRegistry, TableRegistry};
pub use types::{PathClass, PathIds};

/// Split a path into its segments.
///
/// Splits on `/` and strips one leading empty segment (absolute-path
/// artifact) and one trailing empty segment (trailing-slash artifact).
/// Interior empty segments are preserved.
///
/// # Example
///
/// ```
/// use lwm2m_path::split_path;
///
/// assert_eq!(split_path("/1/2"), vec!["1", "2"]);
/// assert_eq!(split_path("1/2"), vec!["1", "2"]);
/// assert_eq!(split_path("1/2/"), vec!["1", "2"]);
/// assert_eq!(split_path(""), Vec::<&str>::new());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('/').collect();
    if segments.first() == Some(&"") {
        segments.remove(0);
    }
    if segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}

/// Classify a path by its depth relative to an object id.
///
/// One segment addresses an object, two an object instance, three a
/// resource. Any other depth does not map onto the hierarchy.
///
/// # Errors
///
/// Returns [`PathError::BadDepth`] for the empty path and for paths
/// deeper than three segments.
///
/// # Example
///
/// ```
/// use lwm2m_path::{classify, PathClass};
///
/// assert_eq!(classify("/3").unwrap(), PathClass::Object);
/// assert_eq!(classify("/3/0").unwrap(), PathClass::Instance);
/// assert_eq!(classify("/3/0/1").unwrap(), PathClass::Resource);
/// assert!(classify("/3/0/1/2").is_err());
/// ```
pub fn classify(path: &str) -> Result<PathClass, PathError> {
    match split_path(path).len() {
        1 => Ok(PathClass::Object),
        2 => Ok(PathClass::Instance),
        3 => Ok(PathClass::Resource),
        _ => Err(PathError::BadDepth),
    }
}

/// Extract the numeric id components of a path.
///
/// # Errors
///
/// Returns [`PathError::BadDepth`] when the depth does not map onto the
/// hierarchy and [`PathError::InvalidId`] when a present segment is not a
/// valid decimal id.
///
/// # Example
///
/// ```
/// use lwm2m_path::id_components;
///
/// let ids = id_components("/1/2").unwrap();
/// assert_eq!(ids.oid, 1);
/// assert_eq!(ids.iid, Some(2));
/// assert_eq!(ids.rid, None);
///
/// assert!(id_components("/temperature/0").is_err());
/// ```
pub fn id_components(path: &str) -> Result<PathIds, PathError> {
    let segments = split_path(path);
    if segments.is_empty() || segments.len() > 3 {
        return Err(PathError::BadDepth);
    }
    let oid = parse_id(segments[0]).ok_or(PathError::InvalidId)?;
    let iid = match segments.get(1) {
        Some(seg) => Some(parse_id(seg).ok_or(PathError::InvalidId)?),
        None => None,
    };
    let rid = match segments.get(2) {
        Some(seg) => Some(parse_id(seg).ok_or(PathError::InvalidId)?),
        None => None,
    };
    Ok(PathIds { oid, iid, rid })
}

/// Parse a path segment as a decimal id.
///
/// Only plain ASCII digit runs qualify; signs, whitespace, and values
/// outside the 16-bit id space are rejected.
///
/// # Example
///
/// ```
/// use lwm2m_path::parse_id;
///
/// assert_eq!(parse_id("0"), Some(0));
/// assert_eq!(parse_id("65535"), Some(65535));
/// assert_eq!(parse_id("65536"), None);
/// assert_eq!(parse_id("-1"), None);
/// assert_eq!(parse_id("temperature"), None);
/// assert_eq!(parse_id(""), None);
/// ```
pub fn parse_id(segment: &str) -> Option<u16> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path depth does not map to object, instance, or resource")]
    BadDepth,
    #[error("path segment is not a valid id")]
    InvalidId,
}
