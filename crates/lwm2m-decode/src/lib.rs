//! Wire-payload decoders for an LWM2M-style device-management stack.
//!
//! Three wire representations decode into normalized in-memory shapes:
//!
//! - CoRE Link-Format discovery strings → [`LinkEntry`]
//! - SenML-like JSON entry lists → [`ResourceTree`]
//! - LWM2M binary TLV → contract only, not implemented
//!
//! All decoders are pure functions over their inputs and lenient by
//! design: malformed sub-elements are skipped best-effort instead of
//! failing the whole payload. The [`decode`] dispatcher keeps a three-way
//! outcome — a decoded result, [`DecodeOutcome::Invalid`] for a value
//! that does not match its declared type, and [`DecodeOutcome::Unhandled`]
//! for a payload type this crate does not decode.
//!
//! # Example
//!
//! ```
//! use lwm2m_decode::{decode, DecodeOutcome, Decoded, Payload};
//! use lwm2m_path::NumericRegistry;
//!
//! let out = decode(
//!     "link",
//!     None,
//!     Payload::Text("</1/2>;pmin=10;pmax=60,</1/2/1>"),
//!     &NumericRegistry,
//! );
//! let DecodeOutcome::Decoded(Decoded::Link(entry)) = out else {
//!     panic!("expected a link entry");
//! };
//! assert_eq!(entry.path, "/1/2");
//! assert_eq!(entry.resrc_list.unwrap(), vec!["/1/2/1"]);
//! ```

pub mod link;
pub mod senml;
pub mod tlv;
pub mod values;

pub use link::{decode_link, LinkDecodeError, LinkEntry, LINK_ATTRS};
pub use senml::{decode_senml, SenmlDecodeError};
pub use tlv::{decode_tlv, TlvDecodeError};
pub use values::{
    InstanceTree, ObjectTree, ResourceInstances, ResourceNode, ResourceTree, ResourceValue,
};

use lwm2m_path::ResourceRegistry;
use serde_json::Value;

/// A wire payload handed to [`decode`].
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    /// Textual payload (Link-Format)
    Text(&'a str),
    /// Binary payload (TLV)
    Bytes(&'a [u8]),
    /// Parsed JSON payload (SenML-like)
    Json(&'a Value),
}

/// A successfully decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Link(LinkEntry),
    Tree(ResourceTree),
}

/// Outcome of a [`decode`] call.
///
/// `Invalid` and `Unhandled` are distinct negative outcomes and callers
/// rely on the distinction: `Invalid` means the value does not match the
/// declared payload type or lacks a required structural field, while
/// `Unhandled` means the payload type itself is not one this crate
/// decodes.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    Decoded(Decoded),
    Invalid,
    Unhandled,
}

/// Decodes `value` according to `payload_type` (`"link"`, `"tlv"`, or
/// `"json"`).
///
/// `base_path` overrides the payload's own base name for JSON payloads;
/// an empty string is treated as absent, matching callers that leave the
/// optional path slot blank. `registry` supplies resource-name alias
/// resolution to the SenML tree builder.
///
/// The TLV route is pinned but unimplemented, so well-typed TLV input
/// reports [`DecodeOutcome::Unhandled`].
pub fn decode(
    payload_type: &str,
    base_path: Option<&str>,
    value: Payload<'_>,
    registry: &dyn ResourceRegistry,
) -> DecodeOutcome {
    let base_path = base_path.filter(|p| !p.is_empty());

    match payload_type {
        "link" => {
            let text = match value {
                Payload::Text(s) => s,
                Payload::Json(Value::String(s)) => s.as_str(),
                _ => return DecodeOutcome::Invalid,
            };
            match decode_link(text, LINK_ATTRS) {
                Ok(entry) => DecodeOutcome::Decoded(Decoded::Link(entry)),
                Err(LinkDecodeError::MissingPath) => DecodeOutcome::Invalid,
            }
        }
        "tlv" => {
            let Payload::Bytes(data) = value else {
                return DecodeOutcome::Invalid;
            };
            match decode_tlv(data) {
                Ok(tree) => DecodeOutcome::Decoded(Decoded::Tree(tree)),
                Err(TlvDecodeError::Unimplemented) => DecodeOutcome::Unhandled,
            }
        }
        "json" => {
            let Payload::Json(payload) = value else {
                return DecodeOutcome::Invalid;
            };
            let has_entries = payload
                .as_object()
                .and_then(|map| map.get("e"))
                .map(Value::is_array)
                .unwrap_or(false);
            if !has_entries {
                return DecodeOutcome::Invalid;
            }
            match decode_senml(base_path, payload, registry) {
                Ok(tree) => DecodeOutcome::Decoded(Decoded::Tree(tree)),
                Err(_) => DecodeOutcome::Invalid,
            }
        }
        _ => DecodeOutcome::Unhandled,
    }
}
