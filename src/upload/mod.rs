pub mod manifest;

use crate::cli;
use crate::osf::{url_from_key, OSF_PASSWORD_ENV, TEMPLATEFLOW_PROJECT_KEY};
use crate::traits::{DatasetLedger, FolderListing, StorageUploader};
use crate::utils;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::Help;
use log::{debug, info, warn};
use std::env;
use std::fs::{copy, metadata, File};
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};

pub const MANIFEST_PREFIX: &str = "tfupload-";

/// Upload files to an existing template, then register their links with DataLad.
///
/// Steps run strictly in order and nothing is rolled back: a failure while
/// registering leaves the files already uploaded to OSF.
pub async fn files<U, L, D>(
    args: &cli::upload::Args,
    uploader: &U,
    listing: &L,
    ledger: &D,
) -> Result<(), Report>
where
    U: StorageUploader,
    L: FolderListing,
    D: DatasetLedger,
{
    let template = args.template.name();
    let password = password(args.osf_pass.as_deref(), env::var(OSF_PASSWORD_ENV).ok())?;

    let files = match &args.files {
        Some(files) if !files.is_empty() => files,
        _ => {
            warn!("No files given to upload");
            return Ok(());
        }
    };

    // ------------------------------------------------------------------------
    // Upload to OSF

    // TODO: upload files concurrently, one osf process per file
    let files = utils::expand_files(files)?;
    let destination = args.osf_dest.as_deref().unwrap_or(template);
    info!("Uploading {} files to OSF: {destination}", files.len());
    uploader.upload(&files, destination, args.force, &password).await?;

    // ------------------------------------------------------------------------
    // Link Manifest

    let folders = listing
        .list_folder(&url_from_key(TEMPLATEFLOW_PROJECT_KEY))
        .await?;
    let root_url = manifest::destination_url(&folders, template)
        .ok_or_else(|| eyre!("No URL found for template {template}"))?;
    debug!("Template storage url: {root_url}");

    let table = manifest::build(listing, root_url, template).await?;
    info!("Found {} remote files for {template}.", table.rows.len());
    debug!("Link manifest:\n{}", table.to_markdown());

    let temp_path = Builder::new()
        .prefix(MANIFEST_PREFIX)
        .suffix(".csv")
        .tempfile_in(env::current_dir()?)
        .wrap_err("Unable to create link manifest.")?
        .into_temp_path();
    table.write(&temp_path)?;

    // the guard removes the manifest when dropped
    let (manifest_path, _manifest_guard) = if args.keep_manifest {
        let path = temp_path.keep()?;
        info!("Keeping link manifest: {path:?}");
        (path, None)
    } else {
        (temp_path.to_path_buf(), Some(temp_path))
    };

    // ------------------------------------------------------------------------
    // Register with DataLad

    let staging = TempDir::new().wrap_err("Unable to create staging directory.")?;
    stage(&files, staging.path())?;

    ledger
        .register_urls(
            &manifest_path,
            manifest::LINK_TEMPLATE,
            manifest::NAME_TEMPLATE,
            args.message.as_deref(),
        )
        .await?;
    ledger.publish().await?;

    info!("Done.");
    Ok(())
}

/// Pick the explicit password, or the environment fallback. Empty counts as unset.
pub fn password(explicit: Option<&str>, fallback: Option<String>) -> Result<String, Report> {
    explicit
        .map(String::from)
        .or(fallback)
        .filter(|password| !password.is_empty())
        .ok_or_else(|| eyre!("OSF password is not set"))
        .suggestion(format!(
            "Use --osf-pass or set the environment variable {OSF_PASSWORD_ENV}."
        ))
}

/// Copy files into a staging directory, returning the staged paths.
pub fn stage(files: &[String], dir: &Path) -> Result<Vec<PathBuf>, Report> {
    let mut staged = Vec::new();
    for file in files {
        let source = Path::new(file);
        let file_name = source
            .file_name()
            .ok_or_else(|| eyre!("Unable to stage file without a name: {file:?}"))?;
        let target = dir.join(file_name);
        copy(source, &target)
            .wrap_err_with(|| format!("Unable to stage file: {source:?}"))?;

        // copy keeps permissions, timestamps are carried over separately
        let modified = metadata(source)?.modified()?;
        File::open(&target)?
            .set_modified(modified)
            .wrap_err_with(|| format!("Unable to set modification time: {target:?}"))?;
        staged.push(target);
    }
    debug!("Staged {} files in {dir:?}", staged.len());
    Ok(staged)
}
