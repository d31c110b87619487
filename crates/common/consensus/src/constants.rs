pub const ATTESTATION_DATA_SSZ_LENGTH: usize = 3 * BYTES_PER_U64 + 5 * BYTES_PER_ROOT;
pub const BYTES_PER_ROOT: usize = 32;
pub const BYTES_PER_U64: usize = 8;
