use crate::cli;
use crate::traits::TemplateResolver;
use color_eyre::eyre::{Report, Result};
use itertools::Itertools;
use log::debug;
use std::path::PathBuf;

/// Fetch files of a template matching the keyword filters.
///
/// Errors from the resolver are returned unchanged.
pub async fn files<R: TemplateResolver>(
    args: &cli::get::Args,
    resolver: &R,
) -> Result<Vec<Option<PathBuf>>, Report> {
    let filters = args.filters();
    debug!("Fetching template {} with filters: {filters:?}", args.template);

    let files = resolver.resolve(args.template.id(), &filters).await?;
    println!("{}", summary(&files));

    Ok(files)
}

/// `Got N files:` followed by one line per resolved path.
pub fn summary(files: &[Option<PathBuf>]) -> String {
    let paths = files
        .iter()
        .flatten()
        .map(|path| path.display().to_string())
        .join("\n");
    let sep = if files.is_empty() { "" } else { ":\n" };
    format!("Got {} files{sep}{paths}", files.len())
}
