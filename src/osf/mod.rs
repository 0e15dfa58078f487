pub mod api;
pub mod client;

pub use api::OsfApi;
pub use client::OsfCli;

use color_eyre::eyre::{eyre, Report, Result};
use serde::Deserialize;
use strum::Display;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// OSF project holding the TemplateFlow archive.
pub const TEMPLATEFLOW_PROJECT_KEY: &str = "ue5gx";
pub const OSF_API_URL: &str = "https://api.osf.io/v2";
pub const OSF_PASSWORD_ENV: &str = "OSF_PASSWORD";

/// Storage listing url of an OSF project.
pub fn url_from_key(key: &str) -> String {
    format!("{OSF_API_URL}/nodes/{key}/files/osfstorage/")
}

// ----------------------------------------------------------------------------
// Listing

/// One page of a remote folder listing.
#[derive(Clone, Debug, Deserialize)]
pub struct Listing {
    pub data: Vec<RemoteItem>,
    #[serde(default)]
    pub links: Option<PageLinks>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Display, PartialEq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    File,
    Folder,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Attributes {
    pub name: String,
    pub kind: Kind,
}

/// Provider links of an item, `move` navigates and `download` fetches.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Links {
    #[serde(default, rename = "move")]
    pub move_url: Option<String>,
    #[serde(default)]
    pub download: Option<String>,
}

/// A file or folder in remote storage.
#[derive(Clone, Debug, Deserialize)]
pub struct RemoteItem {
    pub attributes: Attributes,
    pub links: Links,
}

impl RemoteItem {
    pub fn file(name: &str, download: &str) -> Self {
        RemoteItem {
            attributes: Attributes {
                name: name.to_string(),
                kind: Kind::File,
            },
            links: Links {
                move_url: None,
                download: Some(download.to_string()),
            },
        }
    }

    pub fn folder(name: &str, move_url: &str) -> Self {
        RemoteItem {
            attributes: Attributes {
                name: name.to_string(),
                kind: Kind::Folder,
            },
            links: Links {
                move_url: Some(move_url.to_string()),
                download: None,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn is_folder(&self) -> bool {
        self.attributes.kind == Kind::Folder
    }

    pub fn move_url(&self) -> Result<&str, Report> {
        self.links
            .move_url
            .as_deref()
            .ok_or_else(|| eyre!("Remote {} has no move link: {}", self.attributes.kind, self.name()))
    }

    pub fn download_url(&self) -> Result<&str, Report> {
        self.links
            .download
            .as_deref()
            .ok_or_else(|| eyre!("Remote {} has no download link: {}", self.attributes.kind, self.name()))
    }
}
