//! Byte codec for [`AttestationData`].
//!
//! The encoding is SSZ: every field has a fixed width, so the record is the
//! concatenation of its fields in declaration order. `u64`s are 8 bytes
//! little-endian and roots are copied verbatim, giving
//! [`ATTESTATION_DATA_SSZ_LENGTH`] bytes with no length prefixes or tags.
//!
//! `encode_snappy` / `decode_snappy` wrap the same bytes in snappy raw
//! compression, the `ssz_snappy` form used by consensus test vectors.

use snap::raw::{Decoder, Encoder, decompress_len};
use ssz::{Decode, Encode};
use tracing::trace;

use crate::{
    attestation_data::AttestationData, constants::ATTESTATION_DATA_SSZ_LENGTH, errors::CodecError,
};

pub fn encode(attestation_data: &AttestationData) -> Vec<u8> {
    attestation_data.as_ssz_bytes()
}

pub fn decode(bytes: &[u8]) -> Result<AttestationData, CodecError> {
    if bytes.len() != ATTESTATION_DATA_SSZ_LENGTH {
        trace!(
            len = bytes.len(),
            expected = ATTESTATION_DATA_SSZ_LENGTH,
            "Rejecting attestation data with malformed length"
        );
        return Err(CodecError::MalformedLength {
            len: bytes.len(),
            expected: ATTESTATION_DATA_SSZ_LENGTH,
        });
    }

    Ok(AttestationData::from_ssz_bytes(bytes)?)
}

pub fn encode_snappy(attestation_data: &AttestationData) -> Result<Vec<u8>, CodecError> {
    let mut encoder = Encoder::new();
    Ok(encoder.compress_vec(&encode(attestation_data))?)
}

pub fn decode_snappy(bytes: &[u8]) -> Result<AttestationData, CodecError> {
    // Check the claimed length before the decoder allocates for it.
    let len = decompress_len(bytes)?;
    if len != ATTESTATION_DATA_SSZ_LENGTH {
        trace!(
            len,
            expected = ATTESTATION_DATA_SSZ_LENGTH,
            "Rejecting ssz_snappy attestation data with malformed length"
        );
        return Err(CodecError::MalformedLength {
            len,
            expected: ATTESTATION_DATA_SSZ_LENGTH,
        });
    }

    let mut decoder = Decoder::new();
    let ssz = decoder.decompress_vec(bytes).inspect_err(|err| {
        trace!(?err, "Failed to decompress ssz_snappy attestation data");
    })?;
    decode(&ssz)
}
