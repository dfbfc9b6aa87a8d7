//! LWM2M binary TLV decoding (contract only).

pub mod decoder;
pub mod error;

pub use decoder::decode_tlv;
pub use error::TlvDecodeError;
