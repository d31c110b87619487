use alloy_primitives::Bytes;
use clap::{Parser, ValueEnum};

use crate::cli::constants::{DEFAULT_OUTPUT_FORMAT, DEFAULT_SNAPPY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Debug, Parser)]
pub struct DecodeConfig {
    #[arg(long, help = "Hex encoded SSZ bytes, optionally 0x-prefixed")]
    pub ssz: Bytes,

    #[arg(
        long,
        help = "Treat the input as snappy compressed SSZ",
        default_value_t = DEFAULT_SNAPPY
    )]
    pub snappy: bool,

    #[arg(
        long,
        help = "Output format",
        value_enum,
        default_value = DEFAULT_OUTPUT_FORMAT
    )]
    pub format: OutputFormat,
}
