use crate::types::{FileEntry, MODIFIED_FORMAT};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::{debug, info};

#[must_use]
pub fn by_min_size(entries: Vec<FileEntry>, min_size: u64) -> Vec<FileEntry> {
    let kept: Vec<FileEntry> = entries
        .into_iter()
        .filter(|entry| entry.size >= min_size)
        .collect();
    info!("{} files at or above {min_size} bytes", kept.len());
    kept
}

#[must_use]
pub fn by_name(entries: Vec<FileEntry>, needle: &str) -> Vec<FileEntry> {
    let needle = needle.to_lowercase();
    let kept: Vec<FileEntry> = entries
        .into_iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect();
    info!("{} files matching name filter", kept.len());
    kept
}

pub fn by_modified_since(entries: Vec<FileEntry>, bound: &str) -> Result<Vec<FileEntry>> {
    let bound_ts = NaiveDateTime::parse_from_str(bound, MODIFIED_FORMAT).with_context(|| {
        format!("Invalid date filter '{bound}', expected format 'dd.mm.yyyy HH:MM'")
    })?;

    let kept: Vec<FileEntry> = entries
        .into_iter()
        .filter(|entry| {
            match NaiveDateTime::parse_from_str(&entry.modified, MODIFIED_FORMAT) {
                Ok(ts) => ts >= bound_ts,
                Err(_) => {
                    debug!("Unparseable modified time on {}: {}", entry.name, entry.modified);
                    false
                }
            }
        })
        .collect();
    info!("{} files modified at or after {bound}", kept.len());
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(name: &str, size: u64, modified: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: format!("/data/{name}"),
            size,
            modified: modified.to_string(),
            parent_dir: "/data".to_string(),
        }
    }

    #[test]
    fn min_size_is_inclusive() {
        let entries = vec![
            make_entry("small.txt", 512, "01.08.2025 12:00"),
            make_entry("medium.txt", 1024, "01.08.2025 12:00"),
            make_entry("large.txt", 2048, "01.08.2025 12:00"),
        ];

        let kept = by_min_size(entries, 1000);
        let names: Vec<_> = kept.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["medium.txt", "large.txt"]);
    }

    #[test]
    fn min_size_boundary_is_kept() {
        let kept = by_min_size(vec![make_entry("edge.txt", 1000, "01.08.2025 12:00")], 1000);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let entries = vec![
            make_entry("Test_File.txt", 1, "01.08.2025 12:00"),
            make_entry("example_file.txt", 1, "01.08.2025 12:00"),
        ];

        let kept = by_name(entries, "test");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Test_File.txt");
    }

    #[test]
    fn filtering_empty_list_yields_empty_list() {
        assert!(by_name(Vec::new(), "anything").is_empty());
        assert!(by_min_size(Vec::new(), 1).is_empty());
        assert!(by_modified_since(Vec::new(), "01.08.2025 12:00").unwrap().is_empty());
    }

    #[test]
    fn date_filter_keeps_entries_at_or_after_bound() {
        let entries = vec![
            make_entry("old.txt", 1, "31.07.2025 23:59"),
            make_entry("exact.txt", 1, "01.08.2025 12:00"),
            make_entry("new.txt", 1, "02.08.2025 09:30"),
        ];

        let kept = by_modified_since(entries, "01.08.2025 12:00").unwrap();
        let names: Vec<_> = kept.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["exact.txt", "new.txt"]);
    }

    #[test]
    fn malformed_date_bound_is_an_error() {
        let result = by_modified_since(Vec::new(), "2025-08-01 12:00");
        assert!(result.is_err());
    }

    #[test]
    fn unparseable_entry_timestamp_is_dropped() {
        let entries = vec![
            make_entry("ok.txt", 1, "01.08.2025 12:00"),
            make_entry("odd.txt", 1, "not a timestamp"),
        ];

        let kept = by_modified_since(entries, "01.01.2025 00:00").unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "ok.txt");
    }
}
