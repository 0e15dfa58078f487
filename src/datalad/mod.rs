use crate::traits::DatasetLedger;
use crate::utils;
use color_eyre::eyre::{Report, Result, WrapErr};
use log::{debug, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Wrapper around the `datalad` command-line tool.
///
/// Without a dataset path, commands act on the dataset of the current directory.
#[derive(Clone, Debug)]
pub struct Datalad {
    pub program: String,
    pub dataset: Option<PathBuf>,
}

impl Default for Datalad {
    fn default() -> Self {
        Datalad {
            program: "datalad".to_string(),
            dataset: None,
        }
    }
}

impl Datalad {
    pub fn new(dataset: Option<&Path>) -> Self {
        Datalad {
            dataset: dataset.map(Path::to_path_buf),
            ..Default::default()
        }
    }

    fn dataset_args(&self) -> Vec<OsString> {
        match &self.dataset {
            Some(dataset) => vec!["-d".into(), dataset.into()],
            None => Vec::new(),
        }
    }

    /// Arguments of `datalad addurls [-d DATASET] [--message M] <manifest> <link> <name>`.
    pub fn addurls_args(
        &self,
        manifest: &Path,
        link_template: &str,
        name_template: &str,
        message: Option<&str>,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["addurls".into()];
        args.extend(self.dataset_args());
        if let Some(message) = message {
            args.push("--message".into());
            args.push(message.into());
        }
        args.push(manifest.into());
        args.push(link_template.into());
        args.push(name_template.into());
        args
    }

    pub fn publish_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["publish".into()];
        args.extend(self.dataset_args());
        args
    }
}

impl DatasetLedger for Datalad {
    async fn register_urls(
        &self,
        manifest: &Path,
        link_template: &str,
        name_template: &str,
        message: Option<&str>,
    ) -> Result<(), Report> {
        info!("Registering links from manifest: {manifest:?}");
        let args = self.addurls_args(manifest, link_template, name_template, message);
        let stdout = utils::run_command(&self.program, &args, &[])
            .await
            .wrap_err("DataLad addurls error")?;
        debug!("{}", stdout.trim());
        Ok(())
    }

    async fn publish(&self) -> Result<(), Report> {
        info!("Publishing dataset.");
        let stdout = utils::run_command(&self.program, &self.publish_args(), &[])
            .await
            .wrap_err("DataLad publish error")?;
        debug!("{}", stdout.trim());
        Ok(())
    }
}
