//! Output formatting and printing utilities.
//!
//! The extract status line and lookup results go to stdout. Notes and
//! warnings go to stderr, so stdout stays usable in pipes.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::{FileStrings, keys::KeyCollision};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the single status line of a finished extraction.
pub fn print_extracted(count: usize, output: &Path) {
    println!(
        "Extracted {} missing UI strings and saved to {}",
        count,
        output.display()
    );
}

pub fn print_created(file_name: &str) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", file_name).green()
    );
}

pub fn note(message: &str) {
    eprintln!("{} {}", "note:".bold().cyan(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// List per-file string counts, relative to the scanned root.
pub fn print_file_counts(files: &[FileStrings], root: &Path) {
    print_file_counts_to(files, root, &mut io::stderr().lock());
}

pub fn print_file_counts_to<W: Write>(files: &[FileStrings], root: &Path, writer: &mut W) {
    for file in files {
        let display = file.path.strip_prefix(root).unwrap_or(&file.path);
        let _ = writeln!(
            writer,
            "  {} {}",
            format!("{:>4}", file.count).dimmed(),
            display.display()
        );
    }
}

pub fn print_collisions(collisions: &[KeyCollision]) {
    for collision in collisions {
        warning(&format!(
            "key \"{}\": \"{}\" replaced by \"{}\"",
            collision.key, collision.replaced, collision.value
        ));
    }
}

/// Warn about directories the walk could not list.
///
/// Verbose runs name each one; otherwise a single summary line is printed.
pub fn print_skipped(skipped: &[String], verbose: bool) {
    if skipped.is_empty() {
        return;
    }
    if verbose {
        for reason in skipped {
            warning(&format!("skipped {}", reason));
        }
    } else {
        warning(&format!(
            "skipped {} unreadable director{} (use -v for details)",
            skipped.len(),
            if skipped.len() == 1 { "y" } else { "ies" }
        ));
    }
}

/// Print `text -> path` lines for a lookup run.
pub fn print_lookup<'a>(results: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) {
    print_lookup_to(results, &mut io::stdout().lock());
}

pub fn print_lookup_to<'a, W: Write>(
    results: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
    writer: &mut W,
) {
    for (text, key) in results {
        let _ = match key {
            Some(key) => writeln!(writer, "{} -> {}", text, key.green()),
            None => writeln!(writer, "{} -> {}", text, "(not found)".dimmed()),
        };
    }
}
