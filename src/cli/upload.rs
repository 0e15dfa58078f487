use crate::template::Template;
use clap::Parser;
use indoc::indoc;
use std::path::PathBuf;

/// Upload files to an existing template.
///
/// Files are first uploaded to the OSF repository, and then registered with DataLad.
#[derive(Clone, Debug, Parser)]
#[clap(verbatim_doc_comment)]
#[clap(after_help = indoc! {"
    Example:

        $ templateflow upload fsLR --files tpl-fsLR_desc-new_T1w.nii.gz
"})]
pub struct Args {
    /// Target template.
    ///
    /// The 'tpl-' prefix is added if missing.
    pub template: Template,

    /// Files to upload. Wildcards are accepted and match all characters.
    #[clap(long, num_args = 1..)]
    pub files: Option<Vec<String>>,

    /// OSF password, overrides environmental variable OSF_PASSWORD if set.
    #[clap(long)]
    pub osf_pass: Option<String>,

    /// OSF output path. If not set, defaults to template name.
    #[clap(long)]
    pub osf_dest: Option<String>,

    /// Message to describe upload.
    #[clap(long)]
    pub message: Option<String>,

    /// Force upload even if existing files.
    #[clap(long)]
    pub force: bool,

    /// DataLad dataset to register the new links in.
    ///
    /// Defaults to the dataset of the current directory.
    #[clap(long)]
    pub dataset: Option<PathBuf>,

    /// Keep the generated link manifest instead of removing it.
    #[clap(long)]
    pub keep_manifest: bool,
}

impl Args {
    pub fn new(template: Template) -> Self {
        Args {
            template,
            files: None,
            osf_pass: None,
            osf_dest: None,
            message: None,
            force: false,
            dataset: None,
            keep_manifest: false,
        }
    }
}
