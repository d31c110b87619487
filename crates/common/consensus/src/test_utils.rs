//! Random fixtures for tests. Nothing here is used by the codec itself.

use alloy_primitives::B256;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::attestation_data::{AttestationData, AttestationDataField};

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn random_root(rng: &mut impl RngCore) -> B256 {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    B256::from(bytes)
}

pub fn random_attestation_data(rng: &mut impl Rng) -> AttestationData {
    AttestationData {
        slot: rng.random(),
        shard: rng.random(),
        beacon_block_root: random_root(rng),
        epoch_boundary_root: random_root(rng),
        shard_block_root: random_root(rng),
        latest_crosslink_root: random_root(rng),
        justified_epoch: rng.random(),
        justified_block_root: random_root(rng),
    }
}

/// Returns a value guaranteed to differ from `value`. Moves up by a random
/// non-zero delta, or down when moving up would overflow.
pub fn different_u64(value: u64, rng: &mut impl Rng) -> u64 {
    let delta = rng.random_range(1..=u64::MAX / 2);
    // value > u64::MAX - delta >= delta, so the subtraction cannot underflow
    value.checked_add(delta).unwrap_or_else(|| value - delta)
}

/// Flips every bit of the root.
pub fn inverted_root(root: B256) -> B256 {
    B256::from(root.0.map(|byte| !byte))
}

/// Copies `attestation_data`, changing only `field`.
pub fn with_field_changed(
    attestation_data: &AttestationData,
    field: AttestationDataField,
    rng: &mut impl Rng,
) -> AttestationData {
    let mut changed = *attestation_data;
    match field {
        AttestationDataField::Slot => changed.slot = different_u64(changed.slot, rng),
        AttestationDataField::Shard => changed.shard = different_u64(changed.shard, rng),
        AttestationDataField::BeaconBlockRoot => {
            changed.beacon_block_root = inverted_root(changed.beacon_block_root)
        }
        AttestationDataField::EpochBoundaryRoot => {
            changed.epoch_boundary_root = inverted_root(changed.epoch_boundary_root)
        }
        AttestationDataField::ShardBlockRoot => {
            changed.shard_block_root = inverted_root(changed.shard_block_root)
        }
        AttestationDataField::LatestCrosslinkRoot => {
            changed.latest_crosslink_root = inverted_root(changed.latest_crosslink_root)
        }
        AttestationDataField::JustifiedEpoch => {
            changed.justified_epoch = different_u64(changed.justified_epoch, rng)
        }
        AttestationDataField::JustifiedBlockRoot => {
            changed.justified_block_root = inverted_root(changed.justified_block_root)
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_different_u64_at_bounds() {
        let mut rng = seeded_rng(7);
        for value in [0, 1, u64::MAX / 2, u64::MAX - 1, u64::MAX] {
            for _ in 0..64 {
                assert_ne!(different_u64(value, &mut rng), value);
            }
        }
    }

    #[test]
    fn test_inverted_root() {
        assert_eq!(inverted_root(B256::ZERO), B256::repeat_byte(0xff));
        assert_eq!(inverted_root(B256::repeat_byte(0xff)), B256::ZERO);
    }

    #[test]
    fn test_same_seed_same_fixture() {
        let first = random_attestation_data(&mut seeded_rng(11));
        let second = random_attestation_data(&mut seeded_rng(11));

        assert_eq!(first, second);
    }
}
