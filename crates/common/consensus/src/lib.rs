#![warn(clippy::unwrap_used)]

pub mod attestation_data;
pub mod codec;
pub mod constants;
pub mod errors;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
