pub mod get;
pub mod upload;
pub mod verbosity;

use crate::cli::verbosity::Verbosity;
use clap::{Parser, Subcommand};
use indoc::indoc;

// -----------------------------------------------------------------------------
// CLI Entry Point
// -----------------------------------------------------------------------------

/// TemplateFlow command-line utility.
#[derive(Debug, Parser)]
#[clap(name = "templateflow", author, version)]
#[clap(about = "TemplateFlow command-line utility.")]
#[clap(long_about = indoc! {"
    TemplateFlow command-line utility.

    Commands:

        get         Fetch template specific files
        upload      Push new templates

    For command specific information, use 'templateflow <command> -h'.
"})]
#[clap(propagate_version = true)]
pub struct Cli {
    /// Control output verbosity level.
    #[clap(short = 'v', long, global = true, default_value_t = Verbosity::default())]
    pub verbosity: Verbosity,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
#[clap(verbatim_doc_comment)]
pub enum Command {
    /// Fetch template specific files.
    Get(get::Args),

    /// Push new templates.
    Upload(upload::Args),
}
