mod filters;
mod html_renderer;
mod output;
mod scanner;
mod types;

use clap::{Parser, ValueEnum};
use log::{error, info};
use output::{OutputFormat, SortKey};
use std::path::PathBuf;
use std::process;

/// Environment variable that overrides the positional directory.
const DIR_ENV_VAR: &str = "FILE_CENSUS_DIR";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Walks a directory tree and reports per-file metadata as a table")]
struct Args {
    /// Directory to walk
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Comma-separated extension allow-list (e.g. .txt,.jpg)
    #[arg(long, value_delimiter = ',')]
    extensions: Vec<String>,

    /// Base path for written output formats
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Log verbosity (RUST_LOG takes precedence when set)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Sort key for the rendered table
    #[arg(long, value_enum)]
    sort_by: Option<SortKey>,

    /// Minimum file size in bytes, inclusive
    #[arg(long)]
    min_size: Option<u64>,

    /// Recurse into subdirectories
    #[arg(long, short = 'r')]
    recursive: bool,

    /// Comma-separated formats to write (grid, ascii, markdown, csv, html, json)
    #[arg(long, value_enum, value_delimiter = ',')]
    output_formats: Vec<OutputFormat>,

    /// Case-insensitive substring filter on file names
    #[arg(long)]
    name_filter: Option<String>,

    /// Keep only files modified at or after this time (dd.mm.yyyy HH:MM)
    #[arg(long)]
    date_filter: Option<String>,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    let root = match std::env::var(DIR_ENV_VAR) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => args.directory.clone(),
    };
    let root = if root.is_absolute() {
        root
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(root)
    };

    if !root.is_dir() {
        error!("Directory does not exist: {}", root.display());
        process::exit(1);
    }

    let extensions = scanner::normalize_extensions(&args.extensions);

    info!("Collecting file information from {}", root.display());
    let mut entries = scanner::collect_entries(&root, &extensions, args.recursive);

    if let Some(min_size) = args.min_size {
        entries = filters::by_min_size(entries, min_size);
    }

    if let Some(needle) = &args.name_filter {
        entries = filters::by_name(entries, needle);
    }

    if let Some(bound) = &args.date_filter {
        entries = match filters::by_modified_since(entries, bound) {
            Ok(kept) => kept,
            Err(err) => {
                error!("{err:#}");
                process::exit(1);
            }
        };
    }

    if let Some(key) = args.sort_by {
        output::sort_entries(&mut entries, key);
    }

    output::print_table(&entries);
    output::write_outputs(&entries, &args.output_formats, args.output.as_deref());
}
