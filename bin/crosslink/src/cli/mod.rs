pub mod constants;
pub mod decode;
pub mod encode;
pub mod hash_tree_root;
pub mod verbosity;

use clap::{Parser, Subcommand};

use crate::cli::{
    constants::DEFAULT_VERBOSITY,
    decode::DecodeConfig,
    encode::EncodeConfig,
    hash_tree_root::HashTreeRootConfig,
    verbosity::{Verbosity, verbosity_parser},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (1=error, 2=warn, 3=info, 4=debug, 5=trace)
    #[arg(
        short,
        long,
        global = true,
        default_value = DEFAULT_VERBOSITY,
        value_parser = verbosity_parser
    )]
    pub verbosity: Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode attestation data to hex SSZ
    #[command(name = "encode")]
    Encode(EncodeConfig),

    /// Decode hex SSZ to attestation data
    #[command(name = "decode")]
    Decode(DecodeConfig),

    /// Print the hash tree root of attestation data
    #[command(name = "hash-tree-root")]
    HashTreeRoot(HashTreeRootConfig),
}
