use crate::template::{Entities, Filters, TEMPLATE_PREFIX};
use crate::traits::TemplateResolver;
use crate::utils;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::Help;
use itertools::Itertools;
use log::{debug, info, warn};
use std::env;
use std::fs::{remove_file, symlink_metadata};
use std::path::{Path, PathBuf};
use url::Url;
use walkdir::{DirEntry, WalkDir};

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Public mirror holding the content of every archived template file.
pub const TEMPLATEFLOW_MIRROR_URL: &str = "https://templateflow.s3.amazonaws.com/";

// ----------------------------------------------------------------------------
// Resolver

/// Resolve template files from a local TemplateFlow archive.
///
/// The archive is a skeleton: files that have not been fetched yet are
/// empty (or dangling annex links), and get downloaded from the mirror on
/// first request.
#[derive(Clone, Debug)]
pub struct Resolver {
    pub home: PathBuf,
    pub mirror: Url,
    client: reqwest::Client,
}

impl Resolver {
    pub fn new(home: &Path) -> Result<Self, Report> {
        Ok(Resolver {
            home: home.to_path_buf(),
            mirror: Url::parse(TEMPLATEFLOW_MIRROR_URL)?,
            client: reqwest::Client::new(),
        })
    }

    /// Locate the archive from TEMPLATEFLOW_HOME, or fall back to the user cache.
    pub fn from_env() -> Result<Self, Report> {
        let home = match env::var("TEMPLATEFLOW_HOME") {
            Ok(home) => PathBuf::from(home),
            Err(_) => {
                let user_home = env::var("HOME")
                    .map_err(|_| eyre!("Unable to locate the TemplateFlow archive."))
                    .suggestion("Set the environment variable TEMPLATEFLOW_HOME.")?;
                PathBuf::from(user_home).join(".cache").join("templateflow")
            }
        };
        debug!("TemplateFlow archive: {home:?}");
        Resolver::new(&home)
    }

    /// Files of a template whose names satisfy all filters, sorted by path.
    pub fn find(&self, template_id: &str, filters: &Filters) -> Result<Vec<PathBuf>, Report> {
        let template_dir = self.home.join(format!("{TEMPLATE_PREFIX}{template_id}"));
        if !template_dir.exists() {
            warn!("Template directory does not exist: {template_dir:?}");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        let walker = WalkDir::new(&template_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = entry.wrap_err_with(|| format!("Unable to read: {template_dir:?}"))?;
            if entry.file_type().is_dir() {
                continue;
            }
            let entities = Entities::from_file_name(&entry.file_name().to_string_lossy());
            if entities.matches(filters) {
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }

    /// Download the content of a placeholder file from the mirror.
    pub async fn fetch(&self, path: &Path) -> Result<(), Report> {
        let relative = path
            .strip_prefix(&self.home)
            .wrap_err_with(|| format!("File is outside the archive: {path:?}"))?;
        let remote_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .join("/");
        let url = self.mirror.join(&remote_path)?;

        // dangling annex links must not be written through
        if symlink_metadata(path)?.file_type().is_symlink() {
            remove_file(path)?;
        }

        debug!("Downloading file: {url} to {path:?}");
        utils::download_file(&self.client, url.as_str(), path).await
    }
}

impl TemplateResolver for Resolver {
    async fn resolve(
        &self,
        template_id: &str,
        filters: &Filters,
    ) -> Result<Vec<Option<PathBuf>>, Report> {
        info!("Resolving files of template {template_id}: {filters}");
        let mut resolved = Vec::new();

        for path in self.find(template_id, filters)? {
            if !is_placeholder(&path) {
                resolved.push(Some(path));
                continue;
            }
            match self.fetch(&path).await {
                Ok(()) => resolved.push(Some(path)),
                Err(e) => {
                    warn!("Unable to fetch {path:?}: {e}");
                    resolved.push(None);
                }
            }
        }

        Ok(resolved)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Empty files and dangling links have not been fetched yet.
fn is_placeholder(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(metadata) => metadata.len() == 0,
        Err(_) => true,
    }
}
