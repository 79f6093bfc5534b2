//! Core extraction pipeline.
//!
//! Walk the source root, pull candidate strings out of every matching file,
//! and fold them into one deduplicated set.
//!
//! ## Module Structure
//!
//! - `charset`: target-language character filter
//! - `extract`: comment stripping and the three regex passes
//! - `file_scanner`: directory walk with name-based exclusions
//! - `keys`: key derivation and collision tracking
//! - `parsers`: reading existing locale files

pub mod charset;
pub mod extract;
pub mod file_scanner;
pub mod keys;
pub mod parsers;

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use charset::TargetCharset;
use extract::extract_strings;
use file_scanner::scan_files;

pub struct ScanOptions<'a> {
    pub source_root: &'a Path,
    pub excluded_dirs: &'a [String],
    pub extension: &'a str,
    pub charset: &'a TargetCharset,
}

/// Strings found in a single file, before cross-file deduplication.
#[derive(Debug)]
pub struct FileStrings {
    pub path: PathBuf,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct ExtractionResult {
    pub files: Vec<FileStrings>,
    pub strings: HashSet<String>,
    /// Directories below the root that could not be listed.
    pub skipped: Vec<String>,
}

/// Scan every matching file and return the union of their strings.
///
/// Files are read one at a time. The first unreadable or non-UTF-8 file
/// aborts the whole run. Subdirectories that cannot be listed are skipped.
pub fn collect_strings(options: &ScanOptions) -> Result<ExtractionResult> {
    let scan = scan_files(options.source_root, options.excluded_dirs, options.extension)?;
    let mut result = ExtractionResult {
        skipped: scan.skipped,
        ..Default::default()
    };

    for path in scan.files {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let found = extract_strings(&content, options.charset);
        result.files.push(FileStrings {
            path,
            count: found.len(),
        });
        result.strings.extend(found);
    }

    Ok(result)
}
