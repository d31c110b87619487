use std::ops::Range;

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

use crate::constants::{BYTES_PER_ROOT, BYTES_PER_U64};

/// The data a validator attests to for a shard at a given slot.
///
/// Field order is part of the wire format: the SSZ encoding is the plain
/// concatenation of the fields below, in this order, with no framing.
#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    TreeHash,
)]
pub struct AttestationData {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub shard: u64,

    /// LMD GHOST vote
    pub beacon_block_root: B256,
    pub epoch_boundary_root: B256,

    /// Crosslink vote
    pub shard_block_root: B256,
    pub latest_crosslink_root: B256,

    /// FFG source
    #[serde(with = "serde_utils::quoted_u64")]
    pub justified_epoch: u64,
    pub justified_block_root: B256,
}

impl AttestationData {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        slot: u64,
        shard: u64,
        beacon_block_root: B256,
        epoch_boundary_root: B256,
        shard_block_root: B256,
        latest_crosslink_root: B256,
        justified_epoch: u64,
        justified_block_root: B256,
    ) -> Self {
        Self {
            slot,
            shard,
            beacon_block_root,
            epoch_boundary_root,
            shard_block_root,
            latest_crosslink_root,
            justified_epoch,
            justified_block_root,
        }
    }
}

/// Names each field of [`AttestationData`] together with its position in the
/// SSZ encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttestationDataField {
    Slot,
    Shard,
    BeaconBlockRoot,
    EpochBoundaryRoot,
    ShardBlockRoot,
    LatestCrosslinkRoot,
    JustifiedEpoch,
    JustifiedBlockRoot,
}

impl AttestationDataField {
    /// All fields in encoding order.
    pub const ALL: [AttestationDataField; 8] = [
        AttestationDataField::Slot,
        AttestationDataField::Shard,
        AttestationDataField::BeaconBlockRoot,
        AttestationDataField::EpochBoundaryRoot,
        AttestationDataField::ShardBlockRoot,
        AttestationDataField::LatestCrosslinkRoot,
        AttestationDataField::JustifiedEpoch,
        AttestationDataField::JustifiedBlockRoot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AttestationDataField::Slot => "slot",
            AttestationDataField::Shard => "shard",
            AttestationDataField::BeaconBlockRoot => "beacon_block_root",
            AttestationDataField::EpochBoundaryRoot => "epoch_boundary_root",
            AttestationDataField::ShardBlockRoot => "shard_block_root",
            AttestationDataField::LatestCrosslinkRoot => "latest_crosslink_root",
            AttestationDataField::JustifiedEpoch => "justified_epoch",
            AttestationDataField::JustifiedBlockRoot => "justified_block_root",
        }
    }

    pub fn is_root(&self) -> bool {
        !matches!(
            self,
            AttestationDataField::Slot
                | AttestationDataField::Shard
                | AttestationDataField::JustifiedEpoch
        )
    }

    pub fn byte_len(&self) -> usize {
        if self.is_root() {
            BYTES_PER_ROOT
        } else {
            BYTES_PER_U64
        }
    }

    pub fn offset(&self) -> usize {
        Self::ALL
            .iter()
            .take_while(|field| *field != self)
            .map(|field| field.byte_len())
            .sum()
    }

    /// The bytes this field occupies in the SSZ encoding.
    pub fn byte_range(&self) -> Range<usize> {
        let offset = self.offset();
        offset..offset + self.byte_len()
    }
}
