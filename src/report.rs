//! Flat, depth-first rendering of a scanned tree.

use std::io::Write;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use clap::ValueEnum;
use color_eyre::eyre::Result;
use serde::Serialize;

use dirtree_scan::{EntryKind, FileTree};

/// Month DD, YYYY hh:mm AM/PM
pub const DATE_FORMAT: &str = "%B %d, %Y %I:%M %p";

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated lines
    #[default]
    Text,
    /// JSON array of entries
    Json,
}

/// How a listing is rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Render sizes with binary units instead of raw byte counts.
    pub human_sizes: bool,
    /// Append totals after the listing.
    pub summary: bool,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    kind: EntryKind,
    size: u64,
    modified: DateTime<Local>,
    depth: usize,
}

/// Write every entry of `scanned` in preorder.
pub fn render(mut out: impl Write, scanned: &FileTree, options: &ReportOptions) -> Result<()> {
    let tree = &scanned.tree;

    match options.format {
        OutputFormat::Text => {
            for position in tree.positions() {
                let record = tree.element(position)?;
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    format_size(record.size, options.human_sizes),
                    format_date(record.modified),
                    record.name,
                    record.kind.label()
                )?;
            }
        }
        OutputFormat::Json => {
            let entries = tree
                .positions()
                .into_iter()
                .map(|position| -> Result<JsonEntry> {
                    let record = tree.element(position)?;
                    Ok(JsonEntry {
                        name: record.name.as_str(),
                        kind: record.kind,
                        size: record.size,
                        modified: record.modified.into(),
                        depth: tree.depth(position)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            serde_json::to_writer_pretty(&mut out, &entries)?;
            writeln!(out)?;
        }
    }

    if options.summary {
        let stats = &scanned.stats;
        writeln!(
            out,
            "{} files, {} directories, {} total",
            stats.total_files,
            stats.total_dirs,
            format_size(stats.total_size, options.human_sizes)
        )?;
    }

    Ok(())
}

/// Format a timestamp in the local time zone.
pub fn format_date(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(DATE_FORMAT).to_string()
}

/// Format a byte count, optionally in human-readable form.
fn format_size(bytes: u64, human: bool) -> String {
    if human {
        humansize::format_size(bytes, humansize::BINARY)
    } else {
        bytes.to_string()
    }
}
