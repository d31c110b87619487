use std::path::Path;

use crosslink_consensus::{
    attestation_data::AttestationData,
    codec::{decode, decode_snappy, encode, encode_snappy},
    errors::CodecError,
};
use ssz_static_tests::{test_ssz_static, utils};

test_ssz_static!(AttestationData);

#[test]
fn test_codec_matches_vectors() -> anyhow::Result<()> {
    for case_dir in utils::case_dirs("AttestationData")? {
        let snappy_path = case_dir.join("serialized.ssz_snappy");
        let serialized = utils::read_ssz_snappy_bytes(&snappy_path)?;
        let expected: AttestationData = utils::read_yaml(&case_dir.join("value.yaml"))?;

        assert_eq!(decode(&serialized)?, expected);
        assert_eq!(encode(&expected), serialized);
        assert_eq!(decode_snappy(&std::fs::read(&snappy_path)?)?, expected);
        assert_eq!(decode_snappy(&encode_snappy(&expected)?)?, expected);
    }

    Ok(())
}

#[test]
fn test_codec_rejects_truncated_vector() -> anyhow::Result<()> {
    let case_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(utils::PATH_TO_TEST_DATA_FOLDER)
        .join("AttestationData/ssz_random/case_0");
    let serialized = utils::read_ssz_snappy_bytes(&case_dir.join("serialized.ssz_snappy"))?;

    assert!(matches!(
        decode(&serialized[1..]),
        Err(CodecError::MalformedLength {
            len: 183,
            expected: 184,
        })
    ));

    Ok(())
}
