use crate::osf::RemoteItem;
use crate::traits::FolderListing;
use crate::utils::table::Table;
use color_eyre::eyre::{Report, Result};
use indicatif::ProgressBar;
use log::debug;
use std::collections::VecDeque;

pub const MANIFEST_HEADERS: [&str; 2] = ["name", "link"];
pub const LINK_TEMPLATE: &str = "{link}";
pub const NAME_TEMPLATE: &str = "{name}";

/// Find the storage folder of a template among the top-level project folders.
pub fn destination_url<'a>(folders: &'a [RemoteItem], template: &str) -> Option<&'a str> {
    folders
        .iter()
        .find(|folder| folder.name() == template)
        .and_then(|folder| folder.links.move_url.as_deref())
}

/// Walk a remote folder tree and collect the download links of template files.
///
/// Folders are expanded by appending their contents to the back of the
/// queue. Only files whose name contains `template` are kept.
pub async fn build<L: FolderListing>(
    listing: &L,
    root_url: &str,
    template: &str,
) -> Result<Table, Report> {
    let mut table = Table::with_headers(&MANIFEST_HEADERS);

    let progress = ProgressBar::new_spinner();
    progress.set_message("Listing remote files");

    let mut items: VecDeque<RemoteItem> = listing.list_folder(root_url).await?.into();
    while let Some(item) = items.pop_front() {
        progress.inc(1);
        if item.is_folder() {
            debug!("Expanding remote folder: {}", item.name());
            items.extend(listing.list_folder(item.move_url()?).await?);
            continue;
        }
        if item.name().contains(template) {
            let link = item.download_url()?;
            table.rows.push(vec![item.name().to_string(), link.to_string()]);
        }
    }
    progress.finish_and_clear();

    debug!("Found {} remote files for {template}.", table.rows.len());
    Ok(table)
}
