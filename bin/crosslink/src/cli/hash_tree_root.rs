use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
pub struct HashTreeRootConfig {
    #[arg(
        long,
        help = "Path to a YAML or JSON file holding the attestation data"
    )]
    pub input: PathBuf,
}
