use std::path::PathBuf;

use clap::Parser;

use crate::cli::constants::DEFAULT_SNAPPY;

#[derive(Debug, Parser)]
pub struct EncodeConfig {
    #[arg(
        long,
        help = "Path to a YAML or JSON file holding the attestation data"
    )]
    pub input: PathBuf,

    #[arg(
        long,
        help = "Compress the SSZ bytes with snappy",
        default_value_t = DEFAULT_SNAPPY
    )]
    pub snappy: bool,
}
