//! TLV decoder stub.

use super::error::TlvDecodeError;
use crate::values::ResourceTree;

/// Decodes an LWM2M TLV record buffer into a [`ResourceTree`].
///
/// The TLV grammar — type/identifier/length/value records, nested for
/// multi-instance resources — is not implemented. The contract is pinned
/// here so the dispatcher route and the output shape (the same
/// [`ResourceTree`] the SenML builder produces for the equivalent target)
/// are fixed for whoever completes it.
///
/// # Errors
///
/// Always returns [`TlvDecodeError::Unimplemented`].
pub fn decode_tlv(_data: &[u8]) -> Result<ResourceTree, TlvDecodeError> {
    Err(TlvDecodeError::Unimplemented)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tlv_is_unimplemented() {
        assert_eq!(decode_tlv(&[0xc1, 0x05, 0x2a]), Err(TlvDecodeError::Unimplemented));
        assert_eq!(decode_tlv(&[]), Err(TlvDecodeError::Unimplemented));
    }
}
