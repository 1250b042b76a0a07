use serde::Serialize;

/// Display format for modification times, shared with the `--date-filter` bound.
pub const MODIFIED_FORMAT: &str = "%d.%m.%Y %H:%M";

#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub modified: String,
    pub parent_dir: String,
}
