use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    /// Paths below the root that could not be listed, with the reason.
    pub skipped: Vec<String>,
}

/// Collect every file under `root` whose name ends with `extension`.
///
/// Directories named in `excluded_dirs` are pruned at any depth, together
/// with everything below them. The root itself is always visited and must
/// be readable. Anything deeper that cannot be listed is skipped and
/// recorded in `skipped`.
pub fn scan_files(root: &Path, excluded_dirs: &[String], extension: &str) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, excluded_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() > 0 => {
                result.skipped.push(e.to_string());
                continue;
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to walk directory: {}", root.display()));
            }
        };
        let path = entry.path();

        if path.is_file() && has_extension(&entry, extension) {
            result.files.push(path.to_path_buf());
        }
    }

    Ok(result)
}

fn is_excluded_dir(entry: &DirEntry, excluded_dirs: &[String]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    excluded_dirs.iter().any(|dir| *dir == name)
}

/// Suffix match on the file name, so `.js` does not match `.json` and a file
/// literally named `.js` still counts.
fn has_extension(entry: &DirEntry, extension: &str) -> bool {
    entry.file_name().to_string_lossy().ends_with(extension)
}
