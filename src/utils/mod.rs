pub mod table;

use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::{Help, SectionExt};
use globset::GlobBuilder;
use itertools::Itertools;
use log::{debug, warn};
use std::ffi::OsStr;
use std::fs::write;
use std::path::{Component, Path, PathBuf};
use tokio::process::Command;
use walkdir::WalkDir;

/// Download file from url to path.
pub async fn download_file(
    client: &reqwest::Client,
    url: &str,
    output_path: &Path,
) -> Result<(), Report> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(eyre!(
            "Unable to download file: {url}\nStatus code {}.",
            response.status()
        ));
    }

    let content = response.bytes().await?;
    write(output_path, content)
        .wrap_err_with(|| eyre!("Unable to write file: {output_path:?}"))?;

    Ok(())
}

// ----------------------------------------------------------------------------
// Subprocesses

/// Run an external program to completion, failing on a non-zero exit code.
///
/// Output is captured rather than streamed, stderr is attached to the error.
pub async fn run_command<I, S>(
    program: &str,
    args: I,
    envs: &[(&str, &str)],
) -> Result<String, Report>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args = args
        .into_iter()
        .map(|a| a.as_ref().to_os_string())
        .collect_vec();
    debug!(
        "Running: {program} {}",
        args.iter().map(|a| a.to_string_lossy()).join(" ")
    );

    let output = Command::new(program)
        .args(&args)
        .envs(envs.iter().copied())
        .output()
        .await
        .wrap_err_with(|| format!("Unable to run program: {program}"))
        .suggestion(format!("Check that '{program}' is installed and on the PATH."))?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if !output.status.success() {
        return Err(eyre!("{program} exited with {}", output.status))
            .with_section(|| stderr.trim().to_string().header("Stderr:"));
    }

    Ok(stdout)
}

// ----------------------------------------------------------------------------
// Globs

/// Expand file arguments, patterns containing '*' are matched on the filesystem.
///
/// Literal arguments are kept as given and in order. Nothing checks that a
/// pattern matched anything.
pub fn expand_files(files: &[String]) -> Result<Vec<String>, Report> {
    let mut expanded = Vec::new();
    for file in files {
        if file.contains('*') {
            let matches = expand_glob(file)?;
            if matches.is_empty() {
                warn!("No files matched pattern: {file}");
            }
            expanded.extend(matches);
        } else {
            expanded.push(file.clone());
        }
    }
    Ok(expanded)
}

/// Paths matching a glob pattern, sorted.
pub fn expand_glob(pattern: &str) -> Result<Vec<String>, Report> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .wrap_err_with(|| format!("Invalid glob pattern: {pattern:?}"))?
        .compile_matcher();

    // walk from the longest literal prefix of the pattern
    let components = Path::new(pattern).components().collect_vec();
    let literal = components
        .iter()
        .take_while(|c| !is_glob_component(c))
        .count();
    let root: PathBuf = components[..literal].iter().collect();
    let (root, relative) = if root.as_os_str().is_empty() {
        (PathBuf::from("."), true)
    } else {
        (root, false)
    };

    let glob_components = components[literal..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect_vec();

    let mut walker = WalkDir::new(&root).min_depth(1).sort_by_file_name();
    if !pattern.contains("**") {
        walker = walker.max_depth(components.len() - literal);
    }

    // hidden entries only match a pattern component that starts with '.'
    let walker = walker.into_iter().filter_entry(|e| {
        e.depth() == 0
            || !e.file_name().to_string_lossy().starts_with('.')
            || matches!(glob_components.get(e.depth() - 1), Some(c) if c.starts_with('.'))
    });

    let mut matches = Vec::new();
    for entry in walker.filter_map(|e| e.ok()) {
        let path = if relative {
            entry.path().strip_prefix(&root).unwrap_or(entry.path())
        } else {
            entry.path()
        };
        if glob.is_match(path) {
            matches.push(path.to_string_lossy().to_string());
        }
    }
    matches.sort();

    Ok(matches)
}

fn is_glob_component(component: &Component) -> bool {
    component
        .as_os_str()
        .to_string_lossy()
        .contains(['*', '?', '[', '{'])
}

// ----------------------------------------------------------------------------
// Tables

pub fn ext_to_delim(ext: &str) -> Result<char, Report> {
    let delim = match ext {
        "tsv" => '\t',
        "csv" => ',',
        "txt" => {
            warn!("File extension .txt is assumed to be tab-delimited.");
            '\t'
        }
        _ => {
            return Err(eyre!("Unknown file extension: {ext:?}")
                .suggestion("Options are tsv or csv."))
        }
    };

    Ok(delim)
}

pub fn path_to_delim(path: &Path) -> Result<char, Report> {
    // get the path extension
    let ext = path_to_ext(path)?;

    // convert extension to the expected delimiter
    let delim = ext_to_delim(&ext)?;

    Ok(delim)
}

pub fn path_to_ext(path: &Path) -> Result<String, Report> {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_string(),
        None => return Err(eyre!("Unable to parse extension from file: {path:?}")),
    };

    Ok(ext)
}
