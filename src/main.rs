use clap::Parser;
use color_eyre::eyre::{Report, Result};
use std::env;
use templateflow::cli::verbosity::Verbosity;
use templateflow::cli::Cli;

fn setup(verbosity: Verbosity) -> Result<(), Report> {
    color_eyre::install()?;

    // Set default logging level if RUST_LOG is not set.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", verbosity.to_string())
    }

    env_logger::init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Parse CLI parameters
    let args = Cli::parse();

    // Misc setup actions like logging
    setup(args.verbosity)?;

    templateflow::run(args).await
}
