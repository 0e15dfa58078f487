//! Seams to the external systems the CLI sequences.
//!
//! Each operation takes its collaborators as generic parameters, so the
//! real subprocess and HTTP clients can be swapped for in-memory fakes.

use crate::osf::RemoteItem;
use crate::template::Filters;
use color_eyre::eyre::{Report, Result};
use std::path::{Path, PathBuf};

/// Resolve template files from keyword filters.
#[allow(async_fn_in_trait)]
pub trait TemplateResolver {
    /// Returns one entry per matching file, `None` if it could not be fetched.
    async fn resolve(
        &self,
        template_id: &str,
        filters: &Filters,
    ) -> Result<Vec<Option<PathBuf>>, Report>;
}

/// Push local files to a remote storage destination.
#[allow(async_fn_in_trait)]
pub trait StorageUploader {
    async fn upload(
        &self,
        files: &[String],
        destination: &str,
        force: bool,
        password: &str,
    ) -> Result<(), Report>;
}

/// List the contents of a remote storage folder.
#[allow(async_fn_in_trait)]
pub trait FolderListing {
    /// All items of the folder at `url`, across every page.
    async fn list_folder(&self, url: &str) -> Result<Vec<RemoteItem>, Report>;
}

/// Register download links in a versioned dataset and publish it.
#[allow(async_fn_in_trait)]
pub trait DatasetLedger {
    async fn register_urls(
        &self,
        manifest: &Path,
        link_template: &str,
        name_template: &str,
        message: Option<&str>,
    ) -> Result<(), Report>;

    async fn publish(&self) -> Result<(), Report>;
}
