use crate::utils;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use itertools::Itertools;
use std::default::Default;
use std::fs::{read_to_string, write};
use std::path::{Path, PathBuf};

/// Delimited text table, with a single header line.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub path: PathBuf,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Table {
            path: PathBuf::new(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_headers(headers: &[&str]) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect_vec(),
            ..Default::default()
        }
    }

    pub fn read(path: &Path) -> Result<Table, Report> {
        let mut table = Table::new();

        // lookup delimiter from file extension
        let delim = utils::path_to_delim(path)?;

        let content =
            read_to_string(path).wrap_err_with(|| eyre!("Failed to read file: {path:?}"))?;

        for line in content.lines().filter(|l| !l.is_empty()) {
            let row = line.split(delim).map(String::from).collect_vec();
            // if headers are empty, this is the first line, write headers
            if table.headers.is_empty() {
                table.headers = row;
            }
            // otherwise regular row
            else {
                table.rows.push(row);
            }
        }

        table.path = path.to_path_buf();

        Ok(table)
    }

    /// Header and rows joined by newlines, without a trailing newline.
    pub fn to_delimited(&self, delim: char) -> String {
        let delim = delim.to_string();
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .map(|row| row.iter().join(&delim))
            .join("\n")
    }

    /// write to file
    pub fn write(&self, path: &Path) -> Result<(), Report> {
        // Parse line delimiter from file extension
        let delim = utils::path_to_delim(path)?;
        write(path, self.to_delimited(delim))
            .wrap_err_with(|| format!("Unable to write table: {path:?}"))?;
        Ok(())
    }

    /// Convert table to markdown format
    pub fn to_markdown(&self) -> String {
        // get the maximum width of each column, +2 to add space on either side
        let col_widths = self
            .headers
            .iter()
            .enumerate()
            .map(|(col_i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col_i))
                    .map(|cell| cell.len())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(header.len())
                    + 2
            })
            .collect_vec();

        let mut markdown = String::from("|");
        // frame in between headers and rows
        let mut header_frame = String::from("|");

        for (header, col_width) in self.headers.iter().zip(col_widths.iter()) {
            markdown.push_str(&format!("{:^width$}|", header, width = col_width));
            header_frame.push_str(&format!("{}|", "-".repeat(*col_width)));
        }
        markdown.push('\n');
        markdown.push_str(&header_frame);
        markdown.push('\n');

        for row in &self.rows {
            markdown.push('|');
            for (col_i, col_width) in col_widths.iter().enumerate() {
                let cell = row.get(col_i).map(String::as_str).unwrap_or("");
                markdown.push_str(&format!("{:^width$}|", cell, width = col_width));
            }
            markdown.push('\n');
        }

        markdown
    }
}
