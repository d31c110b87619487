use std::path::Path;

use alloy_primitives::{B256, hex};
use anyhow::Context;
use crosslink_consensus::{
    attestation_data::AttestationData,
    codec::{decode, decode_snappy, encode, encode_snappy},
};
use tracing::{debug, info};
use tree_hash::TreeHash;

use crate::cli::{
    decode::{DecodeConfig, OutputFormat},
    encode::EncodeConfig,
    hash_tree_root::HashTreeRootConfig,
};

/// Reads attestation data from a YAML file. JSON input parses as YAML too.
pub fn read_attestation_data(path: &Path) -> anyhow::Result<AttestationData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse attestation data from {}", path.display()))
}

pub fn run_encode(config: &EncodeConfig) -> anyhow::Result<String> {
    let attestation_data = read_attestation_data(&config.input)?;
    debug!(?attestation_data, "Encoding attestation data");

    let bytes = if config.snappy {
        encode_snappy(&attestation_data)?
    } else {
        encode(&attestation_data)
    };
    info!(
        len = bytes.len(),
        snappy = config.snappy,
        "Encoded attestation data"
    );

    Ok(hex::encode_prefixed(bytes))
}

pub fn run_decode(config: &DecodeConfig) -> anyhow::Result<String> {
    let attestation_data = if config.snappy {
        decode_snappy(&config.ssz)?
    } else {
        decode(&config.ssz)?
    };
    info!(
        slot = attestation_data.slot,
        shard = attestation_data.shard,
        "Decoded attestation data"
    );

    let output = match config.format {
        OutputFormat::Yaml => serde_yaml::to_string(&attestation_data)?,
        OutputFormat::Json => serde_json::to_string_pretty(&attestation_data)?,
    };

    Ok(output)
}

pub fn run_hash_tree_root(config: &HashTreeRootConfig) -> anyhow::Result<B256> {
    let attestation_data = read_attestation_data(&config.input)?;
    let root = attestation_data.tree_hash_root();
    info!(%root, "Computed hash tree root");

    Ok(root)
}
