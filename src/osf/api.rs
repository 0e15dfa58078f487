use crate::osf::{Listing, RemoteItem};
use crate::traits::FolderListing;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use log::debug;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::collections::HashSet;

/// Read-only client of the OSF storage API.
#[derive(Clone, Debug, Default)]
pub struct OsfApi {
    client: reqwest::Client,
}

impl OsfApi {
    pub fn new() -> Self {
        OsfApi {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        OsfApi { client }
    }

    /// Fetch a single listing page.
    pub async fn page(&self, url: &str) -> Result<Listing, Report> {
        let user_agent = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(eyre!(
                "OSF query had status code {status}: {url}",
                status = response.status()
            ));
        }

        let listing: Listing = response
            .json()
            .await
            .wrap_err_with(|| format!("Unable to parse OSF listing: {url}"))?;
        Ok(listing)
    }
}

impl FolderListing for OsfApi {
    async fn list_folder(&self, url: &str) -> Result<Vec<RemoteItem>, Report> {
        let mut items = Vec::new();
        let mut seen = HashSet::new();
        let mut next = Some(url.to_string());

        while let Some(url) = next {
            if !seen.insert(url.clone()) {
                return Err(eyre!("OSF listing pagination loops back to: {url}"));
            }
            debug!("Listing remote folder: {url}");
            let listing = self.page(&url).await?;
            items.extend(listing.data);
            next = listing.links.and_then(|links| links.next);
        }

        Ok(items)
    }
}
