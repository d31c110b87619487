use clap::Parser;
use crosslink::{
    cli::{Cli, Commands, verbosity::Verbosity},
    commands::{run_decode, run_encode, run_hash_tree_root},
};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn setup_logging(verbosity: Verbosity) {
    // RUST_LOG wins over --verbosity when set.
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(verbosity.directive()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbosity);

    let result = match cli.command {
        Commands::Encode(config) => run_encode(&config),
        Commands::Decode(config) => run_decode(&config),
        Commands::HashTreeRoot(config) => run_hash_tree_root(&config).map(|root| root.to_string()),
    };

    match result {
        Ok(output) => println!("{}", output.trim_end()),
        Err(err) => {
            error!("{err:#}");
            // The subscriber may filter out errors, so always report on stderr.
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
