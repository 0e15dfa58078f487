pub mod cli;
pub mod datalad;
pub mod get;
pub mod osf;
pub mod template;
pub mod traits;
pub mod upload;
pub mod utils;


use crate::cli::{Cli, Command};
use crate::datalad::Datalad;
use crate::osf::{OsfApi, OsfCli};
use crate::template::resolve::Resolver;
use clap::CommandFactory;
use color_eyre::eyre::{Report, Result};

/// Dispatch a parsed command line to its operation.
pub async fn run(args: Cli) -> Result<(), Report> {
    match args.command {
        Some(Command::Get(args)) => {
            let resolver = Resolver::from_env()?;
            get::files(&args, &resolver).await?;
        }
        Some(Command::Upload(args)) => {
            let datalad = Datalad::new(args.dataset.as_deref());
            upload::files(&args, &OsfCli::default(), &OsfApi::new(), &datalad).await?;
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}
