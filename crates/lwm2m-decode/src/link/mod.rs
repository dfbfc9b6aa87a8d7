//! CoRE Link-Format (RFC 6690) decoding.

pub mod decoder;
pub mod error;

pub use decoder::{decode_link, LinkEntry, LINK_ATTRS};
pub use error::LinkDecodeError;
