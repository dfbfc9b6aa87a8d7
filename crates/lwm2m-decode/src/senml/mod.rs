//! SenML-like JSON payload decoding.

pub mod decoder;
pub mod error;

pub use decoder::decode_senml;
pub use error::SenmlDecodeError;
