use crate::osf::OSF_PASSWORD_ENV;
use crate::traits::StorageUploader;
use crate::utils;
use color_eyre::eyre::{Report, Result, WrapErr};
use log::debug;

/// Wrapper around the `osf` command-line client.
#[derive(Clone, Debug)]
pub struct OsfCli {
    pub program: String,
}

impl Default for OsfCli {
    fn default() -> Self {
        OsfCli {
            program: "osf".to_string(),
        }
    }
}

impl OsfCli {
    /// Arguments of `osf upload [-f] <files...> <destination>`.
    pub fn upload_args(files: &[String], destination: &str, force: bool) -> Vec<String> {
        let mut args = vec!["upload".to_string()];
        if force {
            args.push("-f".to_string());
        }
        args.extend(files.iter().cloned());
        args.push(destination.to_string());
        args
    }
}

impl StorageUploader for OsfCli {
    async fn upload(
        &self,
        files: &[String],
        destination: &str,
        force: bool,
        password: &str,
    ) -> Result<(), Report> {
        let args = OsfCli::upload_args(files, destination, force);
        let stdout = utils::run_command(&self.program, &args, &[(OSF_PASSWORD_ENV, password)])
            .await
            .wrap_err("OSF upload error")?;
        debug!("{}", stdout.trim());
        Ok(())
    }
}
