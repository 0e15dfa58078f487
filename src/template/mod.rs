pub mod resolve;

use color_eyre::eyre::{eyre, Report, Result};
use color_eyre::Help;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Required prefix of every template name.
pub const TEMPLATE_PREFIX: &str = "tpl-";

// ----------------------------------------------------------------------------
// Template

/// Canonical template name, always carrying the `tpl-` prefix.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Template(String);

impl Template {
    /// Normalize a template name, adding the prefix if it is missing.
    pub fn new(name: &str) -> Self {
        if name.starts_with(TEMPLATE_PREFIX) {
            Template(name.to_string())
        } else {
            Template(format!("{TEMPLATE_PREFIX}{name}"))
        }
    }

    /// Canonical name, ex. `tpl-fsLR`.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Identifier without the prefix, ex. `fsLR`.
    pub fn id(&self) -> &str {
        self.0.strip_prefix(TEMPLATE_PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Template {
    type Err = Report;

    fn from_str(name: &str) -> Result<Self, Report> {
        Ok(Template::new(name))
    }
}

// ----------------------------------------------------------------------------
// Keyword Arguments

/// A single `KEY=VAL` command-line argument.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl FromStr for KeyValue {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self, Report> {
        let parts = input.split('=').collect_vec();
        if parts.len() != 2 {
            return Err(eyre!("Keyword argument is not a KEY=VAL pair: {input:?}"))
                .suggestion("Example: --kwargs desc=nomedialwall suffix=dparc");
        }
        Ok(KeyValue {
            key: parts[0].to_string(),
            value: parts[1].to_string(),
        })
    }
}

/// Keyword filters that narrow down which template files are returned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    pub fn new() -> Self {
        Filters(BTreeMap::new())
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

// Later duplicates of a key override earlier ones
impl From<&[KeyValue]> for Filters {
    fn from(kwargs: &[KeyValue]) -> Self {
        let mut filters = Filters::new();
        kwargs.iter().for_each(|kv| filters.insert(&kv.key, &kv.value));
        filters
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters = self.0.iter().map(|(k, v)| format!("{k}={v}")).join(" ");
        write!(f, "{filters}")
    }
}

// ----------------------------------------------------------------------------
// Entities

/// Entities parsed from a template file name.
///
/// `tpl-fsLR_hemi-L_den-32k_desc-nomedialwall_dparc.label.gii` has the
/// entities `tpl=fsLR hemi=L den=32k desc=nomedialwall`, the suffix `dparc`
/// and the extension `.label.gii`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entities {
    pub pairs: BTreeMap<String, String>,
    pub suffix: Option<String>,
    pub extension: Option<String>,
}

impl Entities {
    pub fn from_file_name(file_name: &str) -> Self {
        let (stem, extension) = match file_name.find('.') {
            Some(i) => (&file_name[..i], Some(file_name[i..].to_string())),
            None => (file_name, None),
        };

        let mut entities = Entities {
            extension,
            ..Default::default()
        };

        let parts = stem.split('_').collect_vec();
        for (i, part) in parts.iter().enumerate() {
            match part.split_once('-') {
                Some((key, value)) => {
                    entities.pairs.insert(canonical_key(key).to_string(), value.to_string());
                }
                None if i == parts.len() - 1 && !part.is_empty() => {
                    entities.suffix = Some(part.to_string());
                }
                None => continue,
            }
        }

        entities
    }

    /// Check whether every filter is satisfied by these entities.
    pub fn matches(&self, filters: &Filters) -> bool {
        filters.iter().all(|(key, value)| match canonical_key(key) {
            "suffix" => self.suffix.as_deref() == Some(value.as_str()),
            "extension" => match &self.extension {
                Some(ext) => ext.trim_start_matches('.') == value.trim_start_matches('.'),
                None => false,
            },
            key => self.pairs.get(key) == Some(value),
        })
    }
}

fn canonical_key(key: &str) -> &str {
    match key {
        "resolution" => "res",
        "template" => "tpl",
        _ => key,
    }
}
