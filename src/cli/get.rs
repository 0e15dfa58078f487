use crate::template::{Filters, KeyValue, Template};
use clap::Parser;
use indoc::indoc;

/// Fetch one or more files from a particular template.
#[derive(Clone, Debug, Parser)]
#[clap(verbatim_doc_comment)]
#[clap(after_help = indoc! {"
    Examples:

        $ templateflow get fsLR
        $ templateflow get fsLR --kwargs desc=nomedialwall suffix=dparc
"})]
pub struct Args {
    /// Target template.
    ///
    /// The 'tpl-' prefix is added if missing.
    pub template: Template,

    /// One or more keyword arguments.
    #[clap(long, num_args = 1.., value_name = "KEY=VAL")]
    pub kwargs: Vec<KeyValue>,
}

impl Args {
    /// Keyword arguments collected into a filter mapping.
    pub fn filters(&self) -> Filters {
        Filters::from(self.kwargs.as_slice())
    }
}
