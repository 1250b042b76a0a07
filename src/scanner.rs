use crate::types::{FileEntry, MODIFIED_FORMAT};
use chrono::{DateTime, Local};
use log::{error, info, warn};
use std::collections::HashSet;
use std::io::{IsTerminal, Write};
use std::path::Path;
use walkdir::WalkDir;

#[must_use]
pub fn collect_entries(
    root: &Path,
    extensions: &HashSet<String>,
    recursive: bool,
) -> Vec<FileEntry> {
    let walker = if recursive {
        WalkDir::new(root)
    } else {
        WalkDir::new(root).max_depth(1)
    };

    let show_progress = std::io::stderr().is_terminal();
    let mut entries = Vec::new();
    let mut processed = 0usize;

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable path: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() || !matches_extension(entry.path(), extensions) {
            continue;
        }

        processed += 1;
        if show_progress && processed % 100 == 0 {
            eprint!("\r  Scanning files: {processed}...");
            std::io::stderr().flush().ok();
        }

        if let Some(info) = read_entry(entry.path()) {
            entries.push(info);
        }
    }

    if show_progress && processed >= 100 {
        eprintln!();
    }

    info!("Found {} files", entries.len());
    entries
}

/// Lowercases and strips leading dots so `.TXT`, `txt` and `.txt` all
/// select the same files.
#[must_use]
pub fn normalize_extensions(raw: &[String]) -> HashSet<String> {
    raw.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn matches_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext))
}

fn read_entry(path: &Path) -> Option<FileEntry> {
    let metadata = match path.metadata() {
        Ok(metadata) => metadata,
        Err(err) => {
            error!("Cannot stat {}: {err}", path.display());
            return None;
        }
    };

    let modified: DateTime<Local> = match metadata.modified() {
        Ok(time) => time.into(),
        Err(err) => {
            error!("Cannot read modification time of {}: {err}", path.display());
            return None;
        }
    };

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent_dir = path
        .parent()
        .map(|parent| parent.to_string_lossy().into_owned())
        .unwrap_or_default();

    Some(FileEntry {
        name,
        path: path.to_string_lossy().into_owned(),
        size: metadata.len(),
        modified: modified.format(MODIFIED_FORMAT).to_string(),
        parent_dir,
    })
}
