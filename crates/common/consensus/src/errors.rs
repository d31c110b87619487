use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Malformed length: got {len} bytes, expected {expected}")]
    MalformedLength { len: usize, expected: usize },

    #[error("Snappy error: {0}")]
    Snappy(#[from] snap::Error),

    /// Any ssz decoder error other than a length mismatch. The fixed layout
    /// cannot produce one once the length check has passed.
    #[error("Invalid SSZ: {0}")]
    InvalidSsz(String),
}

impl From<ssz::DecodeError> for CodecError {
    fn from(err: ssz::DecodeError) -> Self {
        match err {
            ssz::DecodeError::InvalidByteLength { len, expected } => {
                CodecError::MalformedLength { len, expected }
            }
            err => CodecError::InvalidSsz(format!("{err:?}")),
        }
    }
}
