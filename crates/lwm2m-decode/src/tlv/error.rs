use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TlvDecodeError {
    #[error("tlv decoding is not implemented")]
    Unimplemented,
}
