use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::{args::ExtractCommand, exit_status::ExitStatus, report};
use crate::{
    config::{Config, load_config},
    core::{
        ScanOptions,
        charset::TargetCharset,
        collect_strings,
        keys::{insert_all, sort_strings},
    },
    json_writer::JsonWriter,
};

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, PartialEq)]
pub struct ExtractSettings {
    pub source_root: PathBuf,
    pub output: PathBuf,
    pub excluded_dirs: Vec<String>,
    pub extension: String,
    pub target_chars: String,
}

impl ExtractSettings {
    pub fn resolve(config: Config, cmd: &ExtractCommand) -> Result<Self> {
        let config = Config {
            excluded_dirs: if cmd.excluded_dirs.is_empty() {
                config.excluded_dirs
            } else {
                cmd.excluded_dirs.clone()
            },
            extension: cmd.extension.clone().unwrap_or(config.extension),
            ..config
        };
        config.validate()?;

        Ok(Self {
            source_root: cmd
                .source_root
                .clone()
                .unwrap_or_else(|| PathBuf::from(config.source_root)),
            output: cmd
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(config.output)),
            excluded_dirs: config.excluded_dirs,
            extension: config.extension,
            target_chars: config.target_chars,
        })
    }
}

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;

    if verbose {
        match &loaded.path {
            Some(path) => report::note(&format!("Using config {}", path.display())),
            None => report::note("No .trstringsrc.json found, using default configuration"),
        }
    }

    let settings = ExtractSettings::resolve(loaded.config, &cmd)?;
    let charset = TargetCharset::new(&settings.target_chars);

    let result = collect_strings(&ScanOptions {
        source_root: &settings.source_root,
        excluded_dirs: &settings.excluded_dirs,
        extension: &settings.extension,
        charset: &charset,
    })?;

    if verbose {
        report::note(&format!(
            "Scanned {} file(s) under {}",
            result.files.len(),
            settings.source_root.display()
        ));
        report::print_file_counts(&result.files, &settings.source_root);
    }
    report::print_skipped(&result.skipped, verbose);

    let strings = sort_strings(result.strings);
    let mut writer = JsonWriter::create(&settings.output);
    let collisions = insert_all(&strings, &mut writer);

    if verbose {
        report::print_collisions(&collisions);
    }

    writer.save()?;
    report::print_extracted(strings.len(), writer.path());

    Ok(ExitStatus::Success)
}
