use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::{args::LookupCommand, exit_status::ExitStatus, report};
use crate::{
    config::load_config,
    core::parsers::json::{parse_locale_file, read_flat_values},
};

pub fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let index = parse_locale_file(&cmd.messages)?;

    if cmd.common.verbose {
        report::note(&format!(
            "{} string key(s) in {}",
            index.key_count(),
            cmd.messages.display()
        ));
    }

    let texts = if cmd.texts.is_empty() {
        let from = match cmd.from {
            Some(path) => path,
            None => {
                let cwd = env::current_dir().context("Failed to read current directory")?;
                PathBuf::from(load_config(&cwd)?.config.output)
            }
        };
        read_flat_values(&from)?
    } else {
        cmd.texts
    };

    report::print_lookup(texts.iter().map(|text| (text.as_str(), index.find(text))));

    Ok(ExitStatus::Success)
}
