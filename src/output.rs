use crate::html_renderer;
use crate::types::FileEntry;
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{Table, presets};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Name,
    Size,
    Modified,
}

pub fn sort_entries(entries: &mut [FileEntry], key: SortKey) {
    match key {
        SortKey::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Size => entries.sort_by(|a, b| a.size.cmp(&b.size)),
        // Compares the formatted strings, so ordering across year boundaries
        // is lexicographic rather than chronological.
        SortKey::Modified => entries.sort_by(|a, b| a.modified.cmp(&b.modified)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Grid,
    Ascii,
    Markdown,
    Csv,
    Html,
    Json,
}

impl OutputFormat {
    fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Ascii => "ascii",
            Self::Markdown => "markdown",
            Self::Csv => "csv",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Grid | Self::Ascii => "txt",
            Self::Markdown => "md",
            Self::Csv => "csv",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

const HEADERS: [&str; 5] = ["Name", "Path", "Size (bytes)", "Modified", "Parent directory"];

pub fn print_table(entries: &[FileEntry]) {
    if entries.is_empty() {
        println!("No files found.");
        return;
    }

    let total: u64 = entries.iter().map(|entry| entry.size).sum();
    println!(
        "Found {} files, {} total.",
        entries.len().to_string().green(),
        human_bytes::human_bytes(total as f64).green()
    );
    println!("{}", build_table(entries, presets::UTF8_HORIZONTAL_ONLY));
}

pub fn render(entries: &[FileEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Grid => Ok(build_table(entries, presets::UTF8_FULL).to_string()),
        OutputFormat::Ascii => Ok(build_table(entries, presets::ASCII_FULL).to_string()),
        OutputFormat::Markdown => Ok(build_table(entries, presets::ASCII_MARKDOWN).to_string()),
        OutputFormat::Csv => render_csv(entries),
        OutputFormat::Html => Ok(html_renderer::render_report(entries)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
    }
}

pub fn write_outputs(entries: &[FileEntry], formats: &[OutputFormat], output: Option<&Path>) {
    for &format in formats {
        let rendered = match render(entries, format) {
            Ok(rendered) => rendered,
            Err(err) => {
                error!("Failed to render {} output: {err}", format.name());
                continue;
            }
        };

        match output {
            Some(base) => {
                let target = target_path(base, format, formats.len() > 1);
                match fs::write(&target, &rendered) {
                    Ok(()) => info!("Wrote {} output to {}", format.name(), target.display()),
                    Err(err) => error!("Cannot write {}: {err}", target.display()),
                }
            }
            None => println!("{rendered}"),
        }
    }
}

fn build_table(entries: &[FileEntry], preset: &str) -> Table {
    let mut table = Table::new();
    table.load_preset(preset);
    table.set_header(HEADERS.to_vec());

    for entry in entries {
        table.add_row(vec![
            entry.name.clone(),
            entry.path.clone(),
            entry.size.to_string(),
            entry.modified.clone(),
            entry.parent_dir.clone(),
        ]);
    }

    table
}

fn render_csv(entries: &[FileEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("csv buffer error: {err}"))?;
    Ok(String::from_utf8(bytes)?)
}

// Several formats against one --output path get one file each, named by
// swapping in the format's extension.
fn target_path(base: &Path, format: OutputFormat, multiple: bool) -> PathBuf {
    if multiple {
        base.with_extension(format.extension())
    } else {
        base.to_path_buf()
    }
}
